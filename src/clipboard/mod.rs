//! System clipboard access
//!
//! Implements [`ClipboardSource`] for the desktop clipboard by shelling out to
//! the helper tool of the running session. Classification and rendering live
//! in [`clipscope_core`]; this module only fetches bytes.
//!
//! ```text
//! wl-paste / xclip ──> CommandClipboard ──> ClipboardSource ──> inspect
//! ```

pub mod backend;

pub use backend::{BackendKind, CommandClipboard};
pub use clipscope_core::{ClipboardSource, StaticSource};

use crate::config::ClipboardConfig;
use clipscope_core::ClipboardResult;

/// Open the clipboard described by the configuration
pub fn open(config: &ClipboardConfig) -> ClipboardResult<CommandClipboard> {
    let kind = BackendKind::from_config(&config.backend)?;
    tracing::info!(
        "Using {} backend ({})",
        kind.program(),
        if config.primary { "primary selection" } else { "clipboard" }
    );
    Ok(CommandClipboard::new(kind, config.primary))
}
