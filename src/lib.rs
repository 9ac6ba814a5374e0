//! # clipscope
//!
//! Clipboard diagnostics for Linux desktops: lists every format the clipboard
//! offers and renders each one as readable text.
//!
//! This crate wires [`clipscope_core`] (classification and rendering) to the
//! desktop:
//!
//! ```text
//! clipscope
//!   ├─> Clipboard (wl-paste / xclip, implements ClipboardSource)
//!   ├─> Renderer (clipscope_core: signatures, locale ids, markup)
//!   └─> Report (styled console output)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Configuration file and CLI overrides
pub mod config;

/// System clipboard backends
pub mod clipboard;

/// Format enumeration and per-item rendering
pub mod inspect;

/// Report layout and console styling
pub mod report;

/// Utility functions
pub mod utils;

pub use clipscope_core as core;
