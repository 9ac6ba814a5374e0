//! Markup post-processing.
//!
//! Two transformations are applied to rendered text:
//!
//! - **HTML Format preamble** - the Windows `HTML Format` clipboard entry starts
//!   with a `Version:0.9\r\nStartHTML:...` header. Everything before the first
//!   `<` is split off so it can be displayed separately.
//! - **XML prettification** - text that looks like a single element is parsed
//!   and re-serialised with two-space indentation. Anything that does not parse
//!   is left exactly as it was.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::{ClipboardError, ClipboardResult};

/// Marker that starts the Windows `HTML Format` header
pub const HTML_PREAMBLE_MARKER: &str = "Version:";

const INDENT_SIZE: usize = 2;

/// Text after post-processing, with the preamble (if any) split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Header text that preceded the markup
    pub preamble: Option<String>,
    /// Remaining content
    pub content: String,
}

/// Split a `Version:` header from the markup that follows it.
///
/// Returns `None` when the text does not start with the marker or contains no
/// `<` at all.
///
/// ```rust
/// use clipscope_core::markup::split_preamble;
///
/// let (preamble, rest) = split_preamble("Version:1.0<html></html>").unwrap();
/// assert_eq!(preamble, "Version:1.0");
/// assert_eq!(rest, "<html></html>");
/// ```
pub fn split_preamble(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with(HTML_PREAMBLE_MARKER) {
        return None;
    }
    let start = text.find('<')?;
    Some(text.split_at(start))
}

/// Returns true if the text could be a markup fragment worth prettifying
pub fn looks_like_markup(text: &str) -> bool {
    text.starts_with('<') && text.ends_with('>')
}

/// Parse `text` as a single XML element and re-serialise it indented.
///
/// Fails on malformed input (including value-less or duplicate attributes),
/// on unclosed elements, on more than one root element, and on non-whitespace
/// text outside the root. Whitespace-only text nodes are replaced by the
/// indentation; all other text is kept byte for byte.
pub fn prettify(text: &str) -> ClipboardResult<String> {
    let mut reader = Reader::from_str(text);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| {
            ClipboardError::MarkupParse(format!("at byte {}: {}", reader.buffer_position(), e))
        })?;

        match &event {
            Event::Eof => break,
            Event::Start(e) => {
                check_attributes(e)?;
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                check_attributes(e)?;
                if depth == 0 {
                    roots += 1;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ClipboardError::MarkupParse("unmatched end tag".to_string()))?;
            }
            Event::Text(t) if t.iter().all(u8::is_ascii_whitespace) => continue,
            Event::Text(_) if depth == 0 => {
                return Err(ClipboardError::MarkupParse(
                    "text outside the root element".to_string(),
                ));
            }
            Event::CData(_) if depth == 0 => {
                return Err(ClipboardError::MarkupParse(
                    "CDATA outside the root element".to_string(),
                ));
            }
            _ => {}
        }

        if roots > 1 {
            return Err(ClipboardError::MarkupParse(
                "more than one root element".to_string(),
            ));
        }

        writer
            .write_event(event)
            .map_err(|e| ClipboardError::MarkupParse(e.to_string()))?;
    }

    if depth != 0 {
        return Err(ClipboardError::MarkupParse(format!(
            "{} unclosed element(s)",
            depth
        )));
    }
    if roots == 0 {
        return Err(ClipboardError::MarkupParse("no root element".to_string()));
    }

    String::from_utf8(writer.into_inner()).map_err(|e| ClipboardError::MarkupParse(e.to_string()))
}

fn check_attributes(start: &BytesStart<'_>) -> ClipboardResult<()> {
    for attr in start.attributes().with_checks(true) {
        attr.map_err(|e| ClipboardError::MarkupParse(format!("bad attribute: {}", e)))?;
    }
    Ok(())
}

/// Apply preamble splitting or prettification to rendered content.
///
/// Prettification failures are dropped here: the raw text is kept.
pub fn postprocess(content: String) -> Processed {
    if let Some((preamble, rest)) = split_preamble(&content) {
        return Processed {
            preamble: Some(preamble.to_string()),
            content: rest.to_string(),
        };
    }

    if looks_like_markup(&content) {
        match prettify(&content) {
            Ok(pretty) => {
                return Processed {
                    preamble: None,
                    content: pretty,
                }
            }
            Err(e) => tracing::trace!("Keeping raw markup: {}", e),
        }
    }

    Processed {
        preamble: None,
        content,
    }
}
