use thiserror::Error;

/// Errors that can occur while setting up surfaces or exporting the sketch
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Failed to acquire a {width}x{height} rendering surface")]
    Surface { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start download: {0}")]
    Download(String),
}

/// Errors that can occur while loading the sketchpad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Result type for sketch operations
pub type SketchResult<T> = Result<T, SketchError>;
