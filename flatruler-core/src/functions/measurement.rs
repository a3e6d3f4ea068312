//! Point-to-point measurement on the calibrated plane.
//!
//! distance, bearing, destination, offset, line length and ring area.

use geo::{Coord, LineString, Point, Polygon};

use crate::ruler::Ruler;

// ── Longitude wrapping ───────────────────────────────────────────────────────

/// Shortest signed longitude difference, in `[-180, 180]`.
pub(crate) fn wrap(deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&deg) {
        return deg;
    }
    let deg = deg.rem_euclid(360.0);
    if deg > 180.0 {
        deg - 360.0
    } else {
        deg
    }
}

// ── Points ───────────────────────────────────────────────────────────────────

impl Ruler {
    /// Scaled (east, north) displacement from `a` to `b`.
    pub(crate) fn delta(&self, a: Coord<f64>, b: Coord<f64>) -> (f64, f64) {
        (wrap(b.x - a.x) * self.kx(), (b.y - a.y) * self.ky())
    }

    /// Planar distance between two points, in the ruler's unit.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::{Ruler, Unit};
    /// use geo::point;
    ///
    /// let km = Ruler::new(32.8351).unwrap();
    /// let mi = Ruler::with_unit(32.8351, Unit::Miles).unwrap();
    /// let a = point!(x: 30.5, y: 32.8351);
    /// let b = point!(x: 30.51, y: 32.8451);
    /// assert!((km.distance(a, b) / mi.distance(a, b) - 1.609344).abs() < 1e-12);
    /// ```
    pub fn distance(&self, a: Point<f64>, b: Point<f64>) -> f64 {
        self.coord_distance(a.0, b.0)
    }

    pub(crate) fn coord_distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64 {
        let (dx, dy) = self.delta(a, b);
        dx.hypot(dy)
    }

    /// Bearing from `a` to `b`, degrees clockwise from north in `[0, 360)`.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::point;
    ///
    /// let ruler = Ruler::new(10.0).unwrap();
    /// let west = ruler.bearing(point!(x: 0.0, y: 10.0), point!(x: -0.1, y: 10.0));
    /// assert!((west - 270.0).abs() < 1e-9);
    /// ```
    pub fn bearing(&self, a: Point<f64>, b: Point<f64>) -> f64 {
        let (dx, dy) = self.delta(a.0, b.0);
        let deg = dx.atan2(dy).to_degrees();
        let deg = if deg < 0.0 { deg + 360.0 } else { deg };
        // tiny negative angles round up to exactly 360
        if deg >= 360.0 {
            0.0
        } else {
            deg
        }
    }

    /// Point `distance` units away from `origin` along `bearing` degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::point;
    ///
    /// let ruler = Ruler::new(32.8351).unwrap();
    /// let origin = point!(x: 30.5, y: 32.8351);
    /// let east = ruler.destination(origin, 1.0, 90.0);
    /// assert!((ruler.distance(origin, east) - 1.0).abs() < 1e-12);
    /// assert!((ruler.bearing(origin, east) - 90.0).abs() < 1e-9);
    /// assert_eq!(east.y(), origin.y());
    /// ```
    pub fn destination(&self, origin: Point<f64>, distance: f64, bearing: f64) -> Point<f64> {
        let (sin, cos) = bearing.to_radians().sin_cos();
        self.offset(origin, sin * distance, cos * distance)
    }

    /// Shift `p` by `dx` units east and `dy` units north.
    ///
    /// The result is not wrapped into `[-180, 180]`.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::point;
    ///
    /// let ruler = Ruler::new(32.8351).unwrap();
    /// let p = ruler.offset(point!(x: 179.99, y: 32.8), 10.0, 0.0);
    /// assert!(p.x() > 180.0);
    /// ```
    pub fn offset(&self, p: Point<f64>, dx: f64, dy: f64) -> Point<f64> {
        Point::new(p.x() + dx / self.kx(), p.y() + dy / self.ky())
    }
}

// ── Lines and areas ──────────────────────────────────────────────────────────

impl Ruler {
    /// Sum of segment lengths; zero for fewer than two points.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::line_string;
    ///
    /// let ruler = Ruler::new(0.0).unwrap();
    /// let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
    /// let expected = ruler.kx() + ruler.ky();
    /// assert!((ruler.line_distance(&line) - expected).abs() < 1e-9);
    /// ```
    pub fn line_distance(&self, line: &LineString<f64>) -> f64 {
        line.0
            .windows(2)
            .map(|pair| self.coord_distance(pair[0], pair[1]))
            .sum()
    }

    /// Area of a polygon given as rings, in squared units.
    ///
    /// The first ring is the outer boundary and the rest are holes. Rings
    /// need not be closed or consistently oriented; a ring with fewer than
    /// three points has no area.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    /// use geo::line_string;
    ///
    /// let ruler = Ruler::new(0.0).unwrap();
    /// let square = line_string![
    ///     (x: 0.0, y: 0.0), (x: 0.01, y: 0.0), (x: 0.01, y: 0.01), (x: 0.0, y: 0.01),
    /// ];
    /// let expected = 0.01 * ruler.kx() * 0.01 * ruler.ky();
    /// assert!((ruler.area(&[square]) - expected).abs() < 1e-12);
    /// ```
    pub fn area(&self, rings: &[LineString<f64>]) -> f64 {
        let Some((outer, holes)) = rings.split_first() else {
            return 0.0;
        };
        let hole_sum: f64 = holes.iter().map(ring_sum).sum();
        (ring_sum(outer) - hole_sum) / 2.0 * self.kx() * self.ky()
    }

    /// [`Ruler::area`] over a `geo` polygon's exterior and interiors.
    pub fn polygon_area(&self, polygon: &Polygon<f64>) -> f64 {
        let mut rings = Vec::with_capacity(1 + polygon.interiors().len());
        rings.push(polygon.exterior().clone());
        rings.extend(polygon.interiors().iter().cloned());
        self.area(&rings)
    }
}

/// Twice the unsigned shoelace area of a ring, in square degrees.
fn ring_sum(ring: &LineString<f64>) -> f64 {
    let coords = &ring.0;
    if coords.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut k = coords.len() - 1;
    for (j, cur) in coords.iter().enumerate() {
        let prev = coords[k];
        sum += wrap(cur.x - prev.x) * (cur.y + prev.y);
        k = j;
    }
    sum.abs()
}
