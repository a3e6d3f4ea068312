pub mod io;
pub mod linear;
pub mod measurement;
pub mod region;
