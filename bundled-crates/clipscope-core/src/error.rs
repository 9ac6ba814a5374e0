//! Error types for clipboard inspection.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for clipboard inspection
pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

/// Errors that can occur while reading or rendering clipboard content
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Backend error (wl-paste, xclip, etc.)
    #[error("backend error: {0}")]
    Backend(String),

    /// Markup could not be parsed as a single well-formed element
    #[error("markup parse failed: {0}")]
    MarkupParse(String),

    /// Saving an image payload to disk failed
    #[error("failed to write image to {}: {source}", path.display())]
    ImageWrite {
        /// Destination that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClipboardError {
    /// Returns true if processing of the remaining formats can continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MarkupParse(_) | Self::ImageWrite { .. })
    }
}
