//! Business logic services for the Crop Advisory Platform

pub mod advisor;
pub mod alert;
pub mod response_log;
pub mod weather;

pub use advisor::AdvisorService;
pub use alert::AlertStore;
pub use response_log::ResponseLog;
pub use weather::WeatherService;
