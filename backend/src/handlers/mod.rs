//! HTTP handlers for the Crop Advisory Platform

mod advisor;
mod alert;
mod health;
mod response;
mod weather;

pub use advisor::*;
pub use alert::*;
pub use health::*;
pub use response::*;
pub use weather::*;
