//! ClipboardSource trait - where formats and payloads come from.
//!
//! Backends enumerate the formats currently on offer and hand back the data
//! for each one. This crate never talks to a clipboard itself.

use crate::payload::{Payload, Value};
use crate::ClipboardResult;

/// Abstract clipboard reader.
///
/// # Example
///
/// ```rust
/// use clipscope_core::{ClipboardSource, StaticSource};
///
/// let source = StaticSource::new()
///     .with_bytes("text/plain", b"hello".to_vec())
///     .with_bytes("Locale", vec![0x09, 0x04, 0, 0]);
///
/// assert_eq!(source.formats().unwrap(), vec!["text/plain", "Locale"]);
/// ```
pub trait ClipboardSource {
    /// Formats currently available, in the order the backend reports them
    fn formats(&self) -> ClipboardResult<Vec<String>>;

    /// Read the payload for one format.
    ///
    /// `auto_convert` asks the backend to return a decoded [`Value`] where it
    /// knows how. `Ok(None)` means the format was listed but has no data.
    fn payload(&self, format: &str, auto_convert: bool) -> ClipboardResult<Option<Payload>>;
}

/// Returns true for formats whose bytes are text in a known encoding
pub fn is_text_format(format: &str) -> bool {
    format.starts_with("text/")
        || matches!(format, "UTF8_STRING" | "STRING" | "TEXT" | "COMPOUND_TEXT")
}

/// Turn raw bytes into the payload a backend should report.
///
/// Without `auto_convert` the bytes are passed through. With it, text formats
/// become [`Value::Text`] and `text/uri-list` becomes [`Value::FileList`]
/// (comment lines starting with `#` are dropped).
pub fn materialize(format: &str, bytes: Vec<u8>, auto_convert: bool) -> Payload {
    if !auto_convert || !is_text_format(format) {
        return Payload::Bytes(bytes);
    }

    let text = String::from_utf8_lossy(&bytes).into_owned();
    if format == "text/uri-list" {
        let files = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        return Payload::Value(Value::FileList(files));
    }

    Payload::Value(Value::Text(text))
}

/// In-memory clipboard snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<(String, Option<Vec<u8>>)>,
}

impl StaticSource {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a format with data
    pub fn with_bytes(mut self, format: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.entries.push((format.into(), Some(bytes)));
        self
    }

    /// Add a format that is listed but yields no data
    pub fn with_missing(mut self, format: impl Into<String>) -> Self {
        self.entries.push((format.into(), None));
        self
    }
}

impl ClipboardSource for StaticSource {
    fn formats(&self) -> ClipboardResult<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn payload(&self, format: &str, auto_convert: bool) -> ClipboardResult<Option<Payload>> {
        Ok(self
            .entries
            .iter()
            .find(|(name, _)| name == format)
            .and_then(|(_, data)| data.clone())
            .map(|bytes| materialize(format, bytes, auto_convert)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_preserves_order() {
        let source = StaticSource::new()
            .with_bytes("b", vec![1])
            .with_missing("a")
            .with_bytes("c", vec![2]);
        assert_eq!(source.formats().unwrap(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_payload() {
        let source = StaticSource::new().with_missing("image/png");
        assert_eq!(source.payload("image/png", false).unwrap(), None);
        assert_eq!(source.payload("not-listed", false).unwrap(), None);
    }

    #[test]
    fn test_materialize_passthrough() {
        assert_eq!(
            materialize("text/plain", b"hi".to_vec(), false),
            Payload::Bytes(b"hi".to_vec())
        );
        assert_eq!(
            materialize("image/png", vec![0x89], true),
            Payload::Bytes(vec![0x89])
        );
    }

    #[test]
    fn test_materialize_text() {
        assert_eq!(
            materialize("UTF8_STRING", b"hi".to_vec(), true),
            Payload::Value(Value::Text("hi".to_string()))
        );
    }

    #[test]
    fn test_materialize_uri_list() {
        let data = b"# comment\r\nfile:///tmp/a.txt\r\nfile:///tmp/b.txt\r\n".to_vec();
        assert_eq!(
            materialize("text/uri-list", data, true),
            Payload::Value(Value::FileList(vec![
                "file:///tmp/a.txt".to_string(),
                "file:///tmp/b.txt".to_string(),
            ]))
        );
    }
}
