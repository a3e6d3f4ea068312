//! Conditional logging macros.
//!
//! With the `tracing` feature these are `tracing`'s own macros; without it
//! they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

// Path re-export; a bare `use warn;` clashes with the built-in attribute.
#[cfg(not(feature = "tracing"))]
pub(crate) use crate::{debug, warn};
