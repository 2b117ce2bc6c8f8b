use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or driving the paint widget
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode canvas image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to load font {}: {source}", path.display())]
    Font {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Canvas has not been initialized yet")]
    CanvasNotInitialized,
}

/// Result type for paint widget operations
pub type PaintResult<T> = Result<T, PaintError>;
