//! Operations along polylines.
//!
//! Segment projection, interpolation by distance, nearest-point search and
//! sub-line extraction.

use geo::{Coord, LineString, Point};

use crate::functions::measurement::wrap;
use crate::ruler::Ruler;
use crate::types::PointOnLine;

// ── Segment helpers ──────────────────────────────────────────────────────────

/// Point a fraction `t` of the way from `a` to `b`, taking the short way
/// around the antimeridian.
fn interpolate(a: Coord<f64>, b: Coord<f64>, t: f64) -> Coord<f64> {
    Coord {
        x: a.x + wrap(b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Fraction of a segment of length `len` reached at `target`, given the
/// cumulative length `end` at the segment's far end.
fn fraction(target: f64, end: f64, len: f64) -> f64 {
    if len > 0.0 {
        ((target - (end - len)) / len).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// ── Projection ───────────────────────────────────────────────────────────────

impl Ruler {
    /// Foot of the perpendicular from `p` onto segment `[a, b]`, clamped to
    /// the segment, with its position `t` in `[0, 1]`.
    ///
    /// A zero-length segment projects everything onto `a` with `t = 0`.
    pub(crate) fn project_onto_segment(
        &self,
        p: Coord<f64>,
        a: Coord<f64>,
        b: Coord<f64>,
    ) -> (Coord<f64>, f64) {
        let (dx, dy) = self.delta(a, b);
        if dx == 0.0 && dy == 0.0 {
            return (a, 0.0);
        }
        let (px, py) = self.delta(a, p);
        let t = (px * dx + py * dy) / (dx * dx + dy * dy);
        if t >= 1.0 {
            (b, 1.0)
        } else if t > 0.0 {
            let foot = Coord {
                x: a.x + dx / self.kx() * t,
                y: a.y + dy / self.ky() * t,
            };
            (foot, t)
        } else {
            (a, 0.0)
        }
    }

    /// Shortest distance from `p` to the segment `[a, b]`.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::point;
    ///
    /// let ruler = Ruler::new(32.8351).unwrap();
    /// let d = ruler.point_to_segment_distance(
    ///     point!(x: -77.034076, y: 38.882017),
    ///     point!(x: -77.031669, y: 38.878605),
    ///     point!(x: -77.029609, y: 38.881946),
    /// );
    /// assert!((d - 0.37461484020420416).abs() < 1e-9);
    /// ```
    pub fn point_to_segment_distance(&self, p: Point<f64>, a: Point<f64>, b: Point<f64>) -> f64 {
        let (foot, _) = self.project_onto_segment(p.0, a.0, b.0);
        self.coord_distance(foot, p.0)
    }
}

// ── Walking a line ───────────────────────────────────────────────────────────

impl Ruler {
    /// Point `distance` units along `line`.
    ///
    /// Distances at or below zero give the first point and distances past the
    /// end give the last one. `None` only for an empty line.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::line_string;
    ///
    /// let ruler = Ruler::new(0.0).unwrap();
    /// let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)];
    /// let mid = ruler.along(&line, ruler.line_distance(&line) / 2.0).unwrap();
    /// assert!((mid.x() - 0.5).abs() < 1e-12);
    /// assert_eq!(ruler.along(&line, -1.0).unwrap().x(), 0.0);
    /// ```
    pub fn along(&self, line: &LineString<f64>, distance: f64) -> Option<Point<f64>> {
        let coords = &line.0;
        let first = *coords.first()?;
        if distance <= 0.0 {
            return Some(first.into());
        }
        let mut sum = 0.0;
        for pair in coords.windows(2) {
            let d = self.coord_distance(pair[0], pair[1]);
            sum += d;
            if sum > distance {
                let t = fraction(distance, sum, d);
                return Some(interpolate(pair[0], pair[1], t).into());
            }
        }
        coords.last().map(|&c| c.into())
    }

    /// Nearest point on `line` to `p`.
    ///
    /// Every segment is scanned and the first one reaching the minimum
    /// distance wins. A single-point line yields that point with `index = 0`
    /// and `t = 0`; an empty line yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::{line_string, point};
    ///
    /// let ruler = Ruler::new(32.8351).unwrap();
    /// let line = line_string![(x: -77.031669, y: 38.878605), (x: -77.029609, y: 38.881946)];
    /// let hit = ruler.point_on_line(&line, point!(x: -77.034076, y: 38.882017)).unwrap();
    /// assert_eq!(hit.index, 0);
    /// assert!((hit.t - 0.5544221677861756).abs() < 1e-9);
    /// ```
    pub fn point_on_line(&self, line: &LineString<f64>, p: Point<f64>) -> Option<PointOnLine> {
        let coords = &line.0;
        let first = *coords.first()?;
        let mut best = PointOnLine {
            point: first.into(),
            index: 0,
            t: 0.0,
        };
        let mut min_sq = f64::INFINITY;

        for (i, pair) in coords.windows(2).enumerate() {
            let (foot, t) = self.project_onto_segment(p.0, pair[0], pair[1]);
            let (dx, dy) = self.delta(foot, p.0);
            let sq = dx * dx + dy * dy;
            if sq < min_sq {
                min_sq = sq;
                best = PointOnLine {
                    point: foot.into(),
                    index: i,
                    t,
                };
            }
        }
        Some(best)
    }
}

// ── Slicing ──────────────────────────────────────────────────────────────────

impl Ruler {
    /// Part of `line` between the projections of `start` and `stop`.
    ///
    /// The result always runs in line order, whichever argument projects
    /// first, and begins and ends at the projected points.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::{line_string, point};
    ///
    /// let ruler = Ruler::new(0.0).unwrap();
    /// let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
    /// let part = ruler.line_slice(point!(x: 1.5, y: -0.1), point!(x: 0.5, y: 0.1), &line);
    /// assert_eq!(part.0.len(), 3);
    /// assert!((part.0[0].x - 0.5).abs() < 1e-12);
    /// assert_eq!(part.0[1].x, 1.0);
    /// assert!((part.0[2].x - 1.5).abs() < 1e-12);
    /// ```
    pub fn line_slice(
        &self,
        start: Point<f64>,
        stop: Point<f64>,
        line: &LineString<f64>,
    ) -> LineString<f64> {
        let (Some(mut from), Some(mut to)) =
            (self.point_on_line(line, start), self.point_on_line(line, stop))
        else {
            return LineString::new(vec![]);
        };
        if from.index > to.index || (from.index == to.index && from.t > to.t) {
            std::mem::swap(&mut from, &mut to);
        }

        let coords = &line.0;
        let mut slice = vec![from.point.0];
        let l = from.index + 1;
        let r = to.index;
        if l <= r && coords[l] != slice[0] {
            slice.push(coords[l]);
        }
        if l < r {
            slice.extend_from_slice(&coords[l + 1..=r]);
        }
        if coords[r] != to.point.0 {
            slice.push(to.point.0);
        }
        LineString::new(slice)
    }

    /// Part of `line` between two distances measured along it.
    ///
    /// Both distances are clamped to `[0, line_distance(line)]` and taken in
    /// ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::line_string;
    ///
    /// let ruler = Ruler::new(0.0).unwrap();
    /// let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
    /// let len = ruler.line_distance(&line);
    /// let part = ruler.line_slice_along(0.25 * len, 0.75 * len, &line);
    /// assert_eq!(part.0.len(), 3);
    /// assert!((ruler.line_distance(&part) - 0.5 * len).abs() < 1e-9);
    /// ```
    pub fn line_slice_along(
        &self,
        start: f64,
        stop: f64,
        line: &LineString<f64>,
    ) -> LineString<f64> {
        let coords = &line.0;
        match coords.len() {
            0 => return LineString::new(vec![]),
            1 => return LineString::new(coords.clone()),
            _ => {}
        }

        let total = self.line_distance(line);
        let (start, stop) = if start <= stop {
            (start, stop)
        } else {
            (stop, start)
        };
        let start = start.clamp(0.0, total);
        let stop = stop.clamp(0.0, total);

        let mut slice = Vec::new();
        let mut sum = 0.0;
        for pair in coords.windows(2) {
            let (p0, p1) = (pair[0], pair[1]);
            let d = self.coord_distance(p0, p1);
            sum += d;
            if slice.is_empty() && (sum > start || sum >= stop) {
                slice.push(interpolate(p0, p1, fraction(start, sum, d)));
            }
            if sum >= stop {
                slice.push(interpolate(p0, p1, fraction(stop, sum, d)));
                break;
            }
            if sum > start {
                slice.push(p1);
            }
        }
        LineString::new(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{coord, line_string, point};

    fn ruler() -> Ruler {
        Ruler::new(32.8351).unwrap()
    }

    fn segment() -> LineString<f64> {
        line_string![(x: -77.031669, y: 38.878605), (x: -77.029609, y: 38.881946)]
    }

    #[test]
    fn interpolate_across_dateline() {
        let c = interpolate(coord!(x: 179.9, y: 32.7), coord!(x: -179.9, y: 32.9), 0.5);
        assert!((c.x - 180.0).abs() < 1e-9);
        assert!((c.y - 32.8).abs() < 1e-12);
    }

    #[test]
    fn projection_of_degenerate_segment() {
        let r = ruler();
        let a = coord!(x: 1.0, y: 1.0);
        let (foot, t) = r.project_onto_segment(coord!(x: 2.0, y: 2.0), a, a);
        assert_eq!(foot, a);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn point_to_degenerate_segment_is_point_distance() {
        let r = ruler();
        let p = point!(x: 30.1, y: 32.1);
        let a = point!(x: 30.0, y: 32.0);
        assert_eq!(r.point_to_segment_distance(p, a, a), r.distance(p, a));
    }

    #[test]
    fn point_on_line_known_projection() {
        let hit = ruler()
            .point_on_line(&segment(), point!(x: -77.034076, y: 38.882017))
            .unwrap();
        assert!((hit.point.x() - -77.03052689033436).abs() < 1e-9);
        assert!((hit.point.y() - 38.880457324462576).abs() < 1e-9);
        assert_eq!(hit.index, 0);
        assert!((hit.t - 0.5544221677861756).abs() < 1e-9);
    }

    #[test]
    fn point_on_line_clamps_t() {
        let r = ruler();
        let before = r.point_on_line(&segment(), point!(x: -80.0, y: 38.0)).unwrap();
        assert_eq!(before.t, 0.0);
        let after = r.point_on_line(&segment(), point!(x: -75.0, y: 38.0)).unwrap();
        assert_eq!(after.t, 1.0);
    }

    #[test]
    fn point_on_line_over_dateline() {
        let line = line_string![(x: 179.9, y: 32.7), (x: -179.9, y: 32.9)];
        let hit = ruler().point_on_line(&line, point!(x: 180.0, y: 32.7)).unwrap();
        assert!((hit.point.x() - 179.9416136283502).abs() < 1e-9);
        assert!((hit.point.y() - 32.7416136283502).abs() < 1e-9);
    }

    #[test]
    fn point_on_line_first_minimum_wins() {
        // both segments clamp onto the shared vertex
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.1, y: 32.0), (x: 0.1, y: 32.1)];
        let hit = ruler().point_on_line(&line, point!(x: 0.2, y: 31.9)).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.t, 1.0);
        assert_eq!(hit.point, point!(x: 0.1, y: 32.0));
    }

    #[test]
    fn point_on_line_skips_zero_length_segments() {
        let line = line_string![
            (x: 0.0, y: 32.0), (x: 0.0, y: 32.0), (x: 0.1, y: 32.0), (x: 0.1, y: 32.0),
        ];
        let hit = ruler().point_on_line(&line, point!(x: 0.05, y: 32.01)).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.t - 0.5).abs() < 1e-9);
        assert!(hit.t.is_finite());
    }

    #[test]
    fn point_on_line_degenerate_lines() {
        let r = ruler();
        assert!(r.point_on_line(&LineString::new(vec![]), point!(x: 0.0, y: 0.0)).is_none());
        let single = line_string![(x: 3.0, y: 4.0)];
        let hit = r.point_on_line(&single, point!(x: 0.0, y: 0.0)).unwrap();
        assert_eq!(hit.point, point!(x: 3.0, y: 4.0));
        assert_eq!((hit.index, hit.t), (0, 0.0));
    }

    #[test]
    fn along_clamps_to_ends() {
        let r = ruler();
        let line = segment();
        let len = r.line_distance(&line);
        assert_eq!(r.along(&line, 0.0).unwrap(), point!(x: -77.031669, y: 38.878605));
        assert_eq!(r.along(&line, -5.0).unwrap(), point!(x: -77.031669, y: 38.878605));
        assert_eq!(r.along(&line, len).unwrap(), point!(x: -77.029609, y: 38.881946));
        assert_eq!(r.along(&line, 1000.0).unwrap(), point!(x: -77.029609, y: 38.881946));
    }

    #[test]
    fn along_empty_line() {
        assert!(ruler().along(&LineString::new(vec![]), 1.0).is_none());
    }

    #[test]
    fn along_over_dateline() {
        let r = ruler();
        let line = line_string![(x: 179.9, y: 32.7), (x: -179.9, y: 32.9)];
        let third = r.along(&line, r.line_distance(&line) / 3.0).unwrap();
        assert!((third.x() - (179.9 + 0.2 / 3.0)).abs() < 1e-9);
        assert!((third.y() - (32.7 + 0.2 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn along_through_duplicate_points() {
        let r = ruler();
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.0, y: 32.0), (x: 0.1, y: 32.0)];
        let mid = r.along(&line, r.line_distance(&line) / 2.0).unwrap();
        assert!((mid.x() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn line_slice_keeps_interior_vertices() {
        let r = ruler();
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.1, y: 32.0), (x: 0.2, y: 32.0), (x: 0.3, y: 32.0)];
        let slice = r.line_slice(point!(x: 0.05, y: 32.0), point!(x: 0.25, y: 32.0), &line);
        assert_eq!(slice.0.len(), 4);
        assert_eq!(slice.0[1], coord!(x: 0.1, y: 32.0));
        assert_eq!(slice.0[2], coord!(x: 0.2, y: 32.0));
    }

    #[test]
    fn line_slice_reverse_arguments() {
        let r = ruler();
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.1, y: 32.0), (x: 0.2, y: 32.1)];
        let forward = r.line_slice(point!(x: 0.05, y: 32.0), point!(x: 0.15, y: 32.05), &line);
        let reverse = r.line_slice(point!(x: 0.15, y: 32.05), point!(x: 0.05, y: 32.0), &line);
        assert_eq!(forward, reverse);
        assert!(forward.0[0].x < forward.0[forward.0.len() - 1].x);
    }

    #[test]
    fn line_slice_on_vertex_does_not_duplicate() {
        let r = ruler();
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.1, y: 32.0), (x: 0.2, y: 32.0)];
        let slice = r.line_slice(point!(x: 0.1, y: 32.0), point!(x: 0.2, y: 32.0), &line);
        assert_eq!(slice, line_string![(x: 0.1, y: 32.0), (x: 0.2, y: 32.0)]);
    }

    #[test]
    fn line_slice_single_point_line() {
        let line = line_string![(x: 1.0, y: 2.0)];
        let slice = ruler().line_slice(point!(x: 0.0, y: 0.0), point!(x: 5.0, y: 5.0), &line);
        assert_eq!(slice, line);
    }

    #[test]
    fn line_slice_along_bounds() {
        let r = ruler();
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.1, y: 32.0), (x: 0.2, y: 32.0)];
        let len = r.line_distance(&line);

        let whole = r.line_slice_along(-1.0, len + 1.0, &line);
        assert_eq!(whole.0.first(), line.0.first());
        assert!((r.line_distance(&whole) - len).abs() < 1e-12);

        let swapped = r.line_slice_along(0.7 * len, 0.3 * len, &line);
        assert!((r.line_distance(&swapped) - 0.4 * len).abs() < 1e-9);
        assert!(swapped.0[0].x < swapped.0[swapped.0.len() - 1].x);
    }

    #[test]
    fn line_slice_along_at_end_of_line() {
        let r = ruler();
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.1, y: 32.0)];
        let len = r.line_distance(&line);
        let tail = r.line_slice_along(len, len, &line);
        assert_eq!(tail.0.len(), 2);
        assert_eq!(tail.0[0], tail.0[1]);
        assert_eq!(r.line_distance(&tail), 0.0);
    }

    #[test]
    fn line_slice_along_revisiting_line() {
        // the line doubles back over itself, which trips nearest-point slicing
        let r = ruler();
        let line = line_string![(x: 0.0, y: 32.0), (x: 0.1, y: 32.0), (x: 0.0, y: 32.0)];
        let len = r.line_distance(&line);
        let part = r.line_slice_along(0.25 * len, 0.75 * len, &line);
        assert_eq!(part.0.len(), 3);
        assert!((r.line_distance(&part) - 0.5 * len).abs() < 1e-9);
    }

    #[test]
    fn line_slice_along_degenerate_lines() {
        let r = ruler();
        assert!(r.line_slice_along(0.0, 1.0, &LineString::new(vec![])).0.is_empty());
        let single = line_string![(x: 1.0, y: 1.0)];
        assert_eq!(r.line_slice_along(0.0, 1.0, &single), single);
    }
}
