use thiserror::Error;

#[derive(Error, Debug)]
pub enum JourneyError {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Species catalog has no \"Default\" profile")]
    MissingDefaultProfile,

    #[error("Invalid species catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, JourneyError>;
