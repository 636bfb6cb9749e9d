pub mod config;
pub mod error;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{JourneyError, Result};
pub use types::GeoLocation;
