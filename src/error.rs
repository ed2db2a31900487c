// Error types shared by every preprocessing step
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioPrepError {
    /// The file is missing, unreadable, or not a format the decoder understands
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resampler error: {0}")]
    Resample(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Image(#[from] png::EncodingError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AudioPrepError>;

/// Shorthand used by the validation checks in each module
pub(crate) fn invalid(msg: impl Into<String>) -> AudioPrepError {
    AudioPrepError::InvalidParameter(msg.into())
}
