use geo::Point;

/// Axis-aligned box in degrees.
///
/// `west > east` marks a box that crosses the antimeridian; it is never
/// normalised away.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BBox {
    /// # Example
    ///
    /// ```
    /// use flatruler_core::BBox;
    ///
    /// let bbox = BBox::new(30.0, 38.0, 40.0, 39.0);
    /// assert_eq!(bbox, BBox::from([30.0, 38.0, 40.0, 39.0]));
    /// ```
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// `true` when `west > east`.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::BBox;
    ///
    /// assert!(BBox::new(179.9, 32.7, -179.9, 32.9).crosses_antimeridian());
    /// assert!(!BBox::new(-179.9, 32.7, 179.9, 32.9).crosses_antimeridian());
    /// ```
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// `[west, south, east, north]`, the GeoJSON `bbox` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl From<[f64; 4]> for BBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.to_array()
    }
}

/// Nearest location on a line to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOnLine {
    pub point: Point<f64>,
    /// Index of the segment's first vertex.
    pub index: usize,
    /// Position within the segment, in `[0, 1]`.
    pub t: f64,
}
