//! Bounding-box construction and membership.

use std::f64::consts::SQRT_2;

use geo::Point;

use crate::ruler::Ruler;
use crate::types::BBox;

/// Bearing to the south-west corner of a buffer square.
const SOUTH_WEST: f64 = -135.0;
/// Bearing to the north-east corner of a buffer square.
const NORTH_EAST: f64 = 45.0;

impl Ruler {
    /// Box around `p` whose sides lie `distance` units from it.
    ///
    /// The corners are the destinations at `distance·√2` toward the
    /// south-west and north-east, i.e. the square circumscribing the circle
    /// of radius `distance`.
    pub fn buffer_point(&self, p: Point<f64>, distance: f64) -> BBox {
        let diagonal = distance * SQRT_2;
        let sw = self.destination(p, diagonal, SOUTH_WEST);
        let ne = self.destination(p, diagonal, NORTH_EAST);
        BBox::new(sw.x(), sw.y(), ne.x(), ne.y())
    }

    /// Grow `bbox` by `distance` units on every side.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::{BBox, Ruler};
    ///
    /// let ruler = Ruler::new(32.8351).unwrap();
    /// let grown = ruler.buffer_bbox(BBox::new(30.0, 38.0, 40.0, 39.0), 1.0);
    /// assert!((grown.west - 29.989319282570946).abs() < 1e-9);
    /// assert!((grown.north - 39.00901700839156).abs() < 1e-9);
    /// ```
    pub fn buffer_bbox(&self, bbox: BBox, distance: f64) -> BBox {
        let diagonal = distance * SQRT_2;
        let sw = self.destination(Point::new(bbox.west, bbox.south), diagonal, SOUTH_WEST);
        let ne = self.destination(Point::new(bbox.east, bbox.north), diagonal, NORTH_EAST);
        BBox::new(sw.x(), sw.y(), ne.x(), ne.y())
    }

    /// Whether `p` lies in `bbox`, edges included.
    ///
    /// Longitudes are compared by their eastward offset from the west edge,
    /// so neither the point nor the box edges need to lie in `[-180, 180]`.
    /// A box with `west > east` spans the antimeridian and covers
    /// `west..=180` together with `-180..=east`.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::{BBox, Ruler};
    /// use geo::point;
    ///
    /// let ruler = Ruler::new(32.8351).unwrap();
    /// let bbox = BBox::new(179.9, 32.7, -179.9, 32.9);
    /// assert!(ruler.inside_bbox(point!(x: 180.0, y: 32.8), bbox));
    /// assert!(!ruler.inside_bbox(point!(x: 0.0, y: 32.8), bbox));
    /// ```
    pub fn inside_bbox(&self, p: Point<f64>, bbox: BBox) -> bool {
        if p.y() < bbox.south || p.y() > bbox.north {
            return false;
        }
        if bbox.east - bbox.west >= 360.0 {
            return true;
        }
        eastward(bbox.west, p.x()) <= eastward(bbox.west, bbox.east)
    }
}

/// Longitude travelled going east from `from` to `to`, in `[0, 360)`.
fn eastward(from: f64, to: f64) -> f64 {
    (to - from).rem_euclid(360.0)
}
