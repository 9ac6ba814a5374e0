//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do with each clipboard format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Ask the backend to decode text formats instead of returning raw bytes
    pub auto_convert: bool,

    /// Write image payloads to disk
    pub save_images: bool,

    /// Directory for saved images (OS temp directory when unset)
    pub image_dir: Option<PathBuf>,
}

/// Clipboard backend selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Backend to use ("auto", "wayland", "x11")
    pub backend: String,

    /// Read the primary selection instead of the clipboard
    pub primary: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            backend: "auto".to_string(),
            primary: false,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colored output ("auto", "always", "never")
    pub color: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: "auto".to_string(),
        }
    }
}
