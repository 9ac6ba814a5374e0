//! Image signature sniffing.
//!
//! Identifies the binary encoding of an image payload purely from its leading
//! bytes. Nothing is decoded: a buffer either starts with one of the magic
//! prefixes in [`SIGNATURES`] or it is [`ImageSignature::Unknown`].
//!
//! # Example
//!
//! ```rust
//! use clipscope_core::signature::{classify, ImageSignature};
//!
//! let png = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
//! assert_eq!(classify(png), ImageSignature::Png);
//! assert_eq!(classify(b"hello"), ImageSignature::Unknown);
//! ```

use std::fmt;

/// Image encodings recognised by [`classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSignature {
    /// No known signature matched
    Unknown,
    /// JPEG/JFIF (SOI marker)
    Jpeg,
    /// Portable Network Graphics
    Png,
    /// GIF87a / GIF89a
    Gif,
    /// Windows bitmap, either a BMP file or a bare DIB header
    Bmp,
    /// TIFF, little- or big-endian
    Tiff,
    /// Windows icon
    Ico,
}

impl ImageSignature {
    /// Variant name as shown in rendered output ("Png", "Jpeg", ...)
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Jpeg => "Jpeg",
            Self::Png => "Png",
            Self::Gif => "Gif",
            Self::Bmp => "Bmp",
            Self::Tiff => "Tiff",
            Self::Ico => "Ico",
        }
    }

    /// File extension used when the image is saved to disk
    pub fn extension(self) -> String {
        self.name().to_lowercase()
    }

    /// Returns true for every verdict except [`ImageSignature::Unknown`]
    pub fn is_image(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for ImageSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A magic-number prefix and the verdict it implies
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    /// Bytes the buffer must start with
    pub magic: &'static [u8],
    /// Verdict when the prefix matches
    pub verdict: ImageSignature,
}

const fn sig(magic: &'static [u8], verdict: ImageSignature) -> Signature {
    Signature { magic, verdict }
}

/// Known signatures, checked in order. First match wins.
pub const SIGNATURES: &[Signature] = &[
    sig(b"\x89PNG\r\n\x1a\n", ImageSignature::Png),
    sig(b"\xFF\xD8", ImageSignature::Jpeg),
    sig(b"GIF87a", ImageSignature::Gif),
    sig(b"GIF89a", ImageSignature::Gif),
    sig(b"BM", ImageSignature::Bmp),
    // Bare DIBs (CF_DIB / CF_DIBV5) start with the header size:
    // BITMAPINFOHEADER, BITMAPV4HEADER, BITMAPV5HEADER
    sig(&[0x28, 0x00, 0x00, 0x00], ImageSignature::Bmp),
    sig(&[0x6C, 0x00, 0x00, 0x00], ImageSignature::Bmp),
    sig(&[0x7C, 0x00, 0x00, 0x00], ImageSignature::Bmp),
    sig(b"II*\x00", ImageSignature::Tiff),
    sig(b"MM\x00*", ImageSignature::Tiff),
    sig(&[0x00, 0x00, 0x01, 0x00], ImageSignature::Ico),
];

/// Classify a buffer by its leading bytes.
///
/// Total over all inputs: empty and short buffers simply fail to match.
pub fn classify(buffer: &[u8]) -> ImageSignature {
    classify_with(SIGNATURES, buffer)
}

/// Classify against a caller-supplied table, with the same first-match rule.
pub fn classify_with(table: &[Signature], buffer: &[u8]) -> ImageSignature {
    table
        .iter()
        .find(|entry| buffer.starts_with(entry.magic))
        .map_or(ImageSignature::Unknown, |entry| entry.verdict)
}
