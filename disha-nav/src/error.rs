//! Error types for DishaNav

use thiserror::Error;

/// DishaNav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The depth-estimation collaborator failed to deliver a map.
    ///
    /// Resolved fail-soft by the guidance layer: logged, then replaced by
    /// the default straight-ahead heading.
    #[error("Depth source unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Estimation failure, including contract violations by the depth
    /// source (malformed grids). Not recovered.
    #[error("Vision error: {0}")]
    Vision(#[from] disha_vision::VisionError),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
