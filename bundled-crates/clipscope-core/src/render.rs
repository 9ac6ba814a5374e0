//! Content rendering.
//!
//! Turns one `(format name, payload)` pair into a [`RenderedItem`]: a stable,
//! human-readable description of the content. Rules, in order:
//!
//! 1. `Locale` bytes are a little-endian LCID, rendered in decimal.
//! 2. `OneNote 2016 Internal` is never decoded.
//! 3. Other bytes get a hex preview of the first ten bytes and are sniffed
//!    for an image signature. Non-images are decoded as lossy UTF-8; images
//!    are either summarised or written to disk.
//! 4. Decoded values use their string form.
//!
//! The result is then passed through [`markup::postprocess`].

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::markup;
use crate::payload::{Payload, FORMAT_DIB, FORMAT_LOCALE, FORMAT_ONENOTE_INTERNAL};
use crate::signature::{classify, ImageSignature};
use crate::{locale, ClipboardError, ClipboardResult};

/// Number of leading bytes shown in the hex preview
pub const PREVIEW_LEN: usize = 10;

/// Placeholder for formats that are deliberately not decoded
pub const INTERNAL_PLACEHOLDER: &str = "<< internal >>";

/// Extension used for images saved from `DeviceIndependentBitmap`
pub const DIB_EXTENSION: &str = "dib";

/// Rendered description of one clipboard format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Format name as reported by the clipboard
    pub format_name: String,

    /// Byte count for byte payloads, character count for decoded values
    pub byte_length: usize,

    /// Payload kind ("bytes", "text", ...)
    pub type_label: String,

    /// Hex preview of the first bytes, for byte payloads that were sniffed
    pub byte_preview: Option<String>,

    /// Header split off from HTML Format content
    pub preamble: Option<String>,

    /// Rendered content
    pub content: String,

    /// Image signature found in the payload
    pub signature: ImageSignature,

    /// Where the image was saved, if it was
    pub saved_path: Option<PathBuf>,
}

/// Destination for image payloads
pub trait ImageSink {
    /// Persist `bytes` under a fresh name with the given extension and return its path
    fn save(&self, bytes: &[u8], extension: &str) -> ClipboardResult<PathBuf>;
}

impl<T: ImageSink + ?Sized> ImageSink for &T {
    fn save(&self, bytes: &[u8], extension: &str) -> ClipboardResult<PathBuf> {
        (**self).save(bytes, extension)
    }
}

/// Writes images into a directory (the OS temp directory by default)
/// under random names.
#[derive(Debug, Clone)]
pub struct TempImageStore {
    dir: PathBuf,
}

impl TempImageStore {
    /// Store images in the OS temp directory
    pub fn new() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    /// Store images in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for TempImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSink for TempImageStore {
    fn save(&self, bytes: &[u8], extension: &str) -> ClipboardResult<PathBuf> {
        let name = format!("{}.{}", Uuid::new_v4().simple(), extension);
        let path = self.dir.join(name);

        let write = |path: &Path| -> std::io::Result<()> {
            let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
            file.write_all(bytes)?;
            file.flush()
        };

        match write(&path) {
            Ok(()) => {
                debug!("Saved {} bytes to {}", bytes.len(), path.display());
                Ok(path)
            }
            Err(source) => Err(ClipboardError::ImageWrite { path, source }),
        }
    }
}

/// Renders clipboard payloads
#[derive(Debug, Clone, Default)]
pub struct Renderer<S = TempImageStore> {
    save_images: bool,
    sink: S,
}

impl Renderer<TempImageStore> {
    /// Renderer that saves images to the OS temp directory when `save_images` is set
    pub fn new(save_images: bool) -> Self {
        Self {
            save_images,
            sink: TempImageStore::new(),
        }
    }
}

impl<S: ImageSink> Renderer<S> {
    /// Renderer with a custom image sink
    pub fn with_sink(save_images: bool, sink: S) -> Self {
        Self { save_images, sink }
    }

    /// Render one payload.
    ///
    /// Only fails if an image had to be saved and could not be written.
    pub fn render(&self, format_name: &str, payload: &Payload) -> ClipboardResult<RenderedItem> {
        let mut byte_preview = None;
        let mut signature = ImageSignature::Unknown;
        let mut saved_path = None;

        let (content, byte_length) = match payload {
            Payload::Bytes(buffer) if format_name == FORMAT_LOCALE => {
                (locale::decode_le_decimal(buffer), buffer.len())
            }
            Payload::Bytes(buffer) if format_name == FORMAT_ONENOTE_INTERNAL => {
                (INTERNAL_PLACEHOLDER.to_string(), buffer.len())
            }
            Payload::Value(_) if format_name == FORMAT_ONENOTE_INTERNAL => {
                let text = INTERNAL_PLACEHOLDER.to_string();
                let length = text.chars().count();
                (text, length)
            }
            Payload::Bytes(buffer) => {
                byte_preview = Some(hex_preview(buffer));
                signature = classify(buffer);
                debug!("{}: {} bytes, signature {}", format_name, buffer.len(), signature);

                let content = if !signature.is_image() {
                    String::from_utf8_lossy(buffer).into_owned()
                } else if self.save_images {
                    let extension = if format_name == FORMAT_DIB {
                        DIB_EXTENSION.to_string()
                    } else {
                        signature.extension()
                    };
                    let path = self.sink.save(buffer, &extension)?;
                    let content = format!("<< image: {} @ {} >>", signature, path.display());
                    saved_path = Some(path);
                    content
                } else {
                    format!("<< image: {} >>", signature)
                };
                (content, buffer.len())
            }
            Payload::Value(value) => {
                let text = value.to_string();
                let length = text.chars().count();
                (text, length)
            }
        };

        let processed = markup::postprocess(content);

        Ok(RenderedItem {
            format_name: format_name.to_string(),
            byte_length,
            type_label: payload.type_label().to_string(),
            byte_preview,
            preamble: processed.preamble,
            content: processed.content,
            signature,
            saved_path,
        })
    }
}

/// Render one payload with the default temp-directory image store.
pub fn render(format_name: &str, payload: &Payload, save_to_disk: bool) -> ClipboardResult<RenderedItem> {
    Renderer::new(save_to_disk).render(format_name, payload)
}

/// Hex preview of the first [`PREVIEW_LEN`] bytes: `0x89 0x50 0x4e ...`
pub fn hex_preview(buffer: &[u8]) -> String {
    buffer
        .iter()
        .take(PREVIEW_LEN)
        .map(|b| format!("0x{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
