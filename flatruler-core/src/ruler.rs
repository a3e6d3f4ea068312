//! Calibration of the local tangent plane.
//!
//! A [`Ruler`] holds two multipliers, `kx` and `ky`, that turn one degree of
//! longitude and latitude into distance at the calibration latitude. They
//! come from the WGS84 radii of curvature:
//!
//! ```text
//! w²  = 1 / (1 − e² sin²φ)
//! kx  = m · w · cos φ             (normal radius)
//! ky  = m · w³ · (1 − e²)         (meridional radius)
//! ```
//!
//! where `m` is one radian of the equatorial radius expressed in the
//! requested unit.

use std::f64::consts::PI;

use crate::error::{Result, RulerError};
use crate::log::{debug, warn};
use crate::units::Unit;

/// WGS84 equatorial radius, km.
const EQUATORIAL_RADIUS: f64 = 6378.137;
/// WGS84 flattening.
const FLATTENING: f64 = 1.0 / 298.257223563;
/// First eccentricity squared.
const E2: f64 = FLATTENING * (2.0 - FLATTENING);

/// Poleward of this the Web-Mercator tile pyramid ends.
const MERCATOR_LAT_LIMIT: f64 = 85.051_128_779_806_59;

const MAX_ZOOM: u8 = 31;

/// Calibrated scale factors for one reference latitude and unit.
///
/// Immutable once built; share it freely across threads.
///
/// # Example
///
/// ```
/// use flatruler_core::{Ruler, Unit};
///
/// let ruler = Ruler::with_unit(32.8351, Unit::Miles).unwrap();
/// assert!(ruler.kx() > 0.0 && ruler.ky() > 0.0);
/// assert_eq!(ruler.unit(), Unit::Miles);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruler {
    kx: f64,
    ky: f64,
    unit: Unit,
}

impl Ruler {
    /// Calibrate in kilometers.
    pub fn new(latitude: f64) -> Result<Self> {
        Self::with_unit(latitude, Unit::Kilometers)
    }

    /// Calibrate in `unit`.
    ///
    /// `latitude` must be finite and within ±90°.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::{Ruler, RulerError, Unit};
    ///
    /// let ruler = Ruler::with_unit(32.8351, Unit::Meters).unwrap();
    /// assert!((ruler.kx() - 93626.66942951248).abs() < 1e-6);
    /// assert!(matches!(
    ///     Ruler::with_unit(f64::NAN, Unit::Meters),
    ///     Err(RulerError::InvalidLatitude(_))
    /// ));
    /// ```
    pub fn with_unit(latitude: f64, unit: Unit) -> Result<Self> {
        if !latitude.is_finite() || latitude.abs() > 90.0 {
            return Err(RulerError::InvalidLatitude(latitude));
        }
        if latitude.abs() > MERCATOR_LAT_LIMIT {
            warn!(latitude, "calibrating beyond the Web-Mercator latitude limit");
        }

        let m = EQUATORIAL_RADIUS.to_radians() * unit.factor();
        let coslat = latitude.to_radians().cos();
        let w2 = 1.0 / (1.0 - E2 * (1.0 - coslat * coslat));
        let w = w2.sqrt();

        let ruler = Ruler {
            kx: m * w * coslat,
            ky: m * w * w2 * (1.0 - E2),
            unit,
        };
        debug!(latitude, %unit, kx = ruler.kx, ky = ruler.ky, "calibrated ruler");
        Ok(ruler)
    }

    /// Calibrate with a unit given by name (see [`UNITS`](crate::units::UNITS)).
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::Ruler;
    ///
    /// assert!(Ruler::with_unit_name(50.0, "nauticalmiles").is_ok());
    /// assert!(Ruler::with_unit_name(50.0, "furlongs").is_err());
    /// ```
    pub fn with_unit_name(latitude: f64, unit: &str) -> Result<Self> {
        Self::with_unit(latitude, unit.parse()?)
    }

    /// Calibrate at the center latitude of a Web-Mercator tile row.
    ///
    /// # Example
    ///
    /// ```
    /// use flatruler_core::{Ruler, Unit};
    ///
    /// let ruler = Ruler::from_tile(11041, 15, Unit::Kilometers).unwrap();
    /// let direct = Ruler::new(50.5).unwrap();
    /// assert!((ruler.kx() / direct.kx() - 1.0).abs() < 1e-3);
    /// ```
    pub fn from_tile(row: u32, zoom: u8, unit: Unit) -> Result<Self> {
        let latitude = tile_center_latitude(row, zoom)?;
        debug!(row, zoom, latitude, "tile calibration latitude");
        Self::with_unit(latitude, unit)
    }

    /// Distance units per degree of longitude.
    pub fn kx(&self) -> f64 {
        self.kx
    }

    /// Distance units per degree of latitude.
    pub fn ky(&self) -> f64 {
        self.ky
    }

    /// Unit every distance is expressed in.
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

/// Latitude of the vertical center of tile `row` at `zoom`.
fn tile_center_latitude(row: u32, zoom: u8) -> Result<f64> {
    if zoom > MAX_ZOOM || u64::from(row) >= 1u64 << zoom {
        return Err(RulerError::InvalidTile { row, zoom });
    }
    let tiles = f64::from(1u32 << zoom);
    let n = PI * (1.0 - 2.0 * (f64::from(row) + 0.5) / tiles);
    let latitude = n.sinh().atan().to_degrees();
    if !latitude.is_finite() {
        return Err(RulerError::InvalidTile { row, zoom });
    }
    Ok(latitude)
}

/// Calibration request, e.g. read from a config file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulerConfig {
    pub latitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: Unit,
}

impl RulerConfig {
    pub fn build(&self) -> Result<Ruler> {
        Ruler::with_unit(self.latitude, self.unit)
    }
}
