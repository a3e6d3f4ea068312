#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `flatruler-core`.

pub mod error;
pub mod functions;
mod log;
pub mod ruler;
pub mod types;
pub mod units;

pub use error::{Result, RulerError};
pub use ruler::{Ruler, RulerConfig};
pub use types::{BBox, PointOnLine};
pub use units::{Unit, UNITS};
