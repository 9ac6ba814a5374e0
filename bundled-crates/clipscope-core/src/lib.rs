//! # clipscope-core
//!
//! Classification and rendering of clipboard content for diagnostics.
//!
//! Given a format name and its payload, this crate decides how to interpret
//! the data (locale id, text, markup or image) and produces a readable
//! [`RenderedItem`]:
//!
//! - **[`signature::classify`]** - image encoding from leading magic bytes
//! - **[`Renderer`]** - per-format rendering rules, optional image saving
//! - **[`markup`]** - HTML Format preamble split, XML prettification
//! - **[`ClipboardSource`] trait** - abstract clipboard reader
//!
//! ## Quick Start
//!
//! ```rust
//! use clipscope_core::{Payload, Renderer};
//!
//! let renderer = Renderer::new(false);
//! let item = renderer.render("Locale", &Payload::Bytes(vec![0x09, 0x04])).unwrap();
//! assert_eq!(item.content, "1033");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

mod error;

pub mod locale;
pub mod markup;
pub mod payload;
pub mod render;
pub mod signature;
pub mod source;

pub use error::{ClipboardError, ClipboardResult};
pub use payload::{Payload, Value};
pub use render::{render, ImageSink, RenderedItem, Renderer, TempImageStore};
pub use signature::{classify, ImageSignature};
pub use source::{ClipboardSource, StaticSource};
