//! Domain models for the Crop Advisory Platform

mod alert;
mod crop;
mod farm;
mod weather;

pub use alert::*;
pub use crop::*;
pub use farm::*;
pub use weather::*;
