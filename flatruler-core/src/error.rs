use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulerError {
    #[error("invalid latitude: {0} (expected a finite value in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("unknown unit {0:?}; use one of: {names}", names = crate::units::unit_names())]
    UnknownUnit(String),

    #[error("invalid tile: row {row} at zoom {zoom}")]
    InvalidTile { row: u32, zoom: u8 },

    #[error("geozero error: {0}")]
    Geozero(#[from] geozero::error::GeozeroError),

    #[error("geometry is not a {0}")]
    WrongType(&'static str),

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RulerError>;
