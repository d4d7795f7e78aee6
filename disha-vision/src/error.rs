//! Error types for DishaVision

/// Result type alias
pub type Result<T> = std::result::Result<T, VisionError>;

/// DishaVision error types
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    /// Malformed depth map (empty, jagged rows, or non-finite values).
    ///
    /// Fatal to the call: a depth-estimation collaborator that hands over
    /// such a grid has violated its contract.
    #[error("Invalid depth map: {0}")]
    InvalidInput(String),

    /// I/O error while reading depth data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unparseable depth data (bad CSV cell, undecodable image)
    #[error("Parse error: {0}")]
    Parse(String),
}
