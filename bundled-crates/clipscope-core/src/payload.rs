//! Clipboard payloads.
//!
//! A payload is whatever a clipboard backend hands back for one format name:
//! either the raw bytes or a value the backend already decoded.

use std::fmt;

/// Format name that carries a little-endian locale identifier
pub const FORMAT_LOCALE: &str = "Locale";

/// Opaque OneNote format that is never decoded
pub const FORMAT_ONENOTE_INTERNAL: &str = "OneNote 2016 Internal";

/// Bare bitmap format, saved with a `.dib` extension
pub const FORMAT_DIB: &str = "DeviceIndependentBitmap";

/// Data associated with one clipboard format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Raw bytes, never modified after construction
    Bytes(Vec<u8>),
    /// Already-decoded value
    Value(Value),
}

impl Payload {
    /// Runtime kind of the payload, shown next to the format name
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Value(value) => value.type_label(),
        }
    }

    /// Borrow the raw bytes, if this is a byte payload
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Value(_) => None,
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Decoded clipboard value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text
    Text(String),
    /// Integer
    Integer(i64),
    /// List of file paths or URIs, one per line when displayed
    FileList(Vec<String>),
}

impl Value {
    /// Kind of value, shown next to the format name
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::FileList(_) => "file-list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{}", n),
            Self::FileList(files) => f.write_str(&files.join("\n")),
        }
    }
}
