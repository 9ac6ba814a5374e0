//! Report presentation
//!
//! The renderer produces plain [`RenderedItem`]s. This module lays them out
//! as text segments tagged with a semantic [`Emphasis`]; a [`Presenter`]
//! decides how each tag looks.
//!
//! ```text
//! Formats: [text/plain, image/png]
//!
//! image/png - 1234 chars (bytes)
//! Bytes 0..9 { 0x89 0x50 0x4e 0x47 0x0d 0x0a 0x1a 0x0a 0x00 0x00 }
//! [<< image: Png >>]
//! ```

use std::io::{self, IsTerminal, Write};

use clipscope_core::{ClipboardError, RenderedItem};

/// Semantic role of a piece of report text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Structural labels ("Formats: ")
    Label,
    /// Brackets around lists and content
    Delimiter,
    /// The list of format names
    FormatList,
    /// Per-item heading line
    Heading,
    /// Hex byte preview
    Preview,
    /// HTML Format header split from the content
    Preamble,
    /// Rendered content
    Content,
    /// Per-item failures
    Warning,
    /// Unstyled text (newlines)
    Plain,
}

impl Emphasis {
    /// ANSI SGR parameters for this tag
    fn ansi(self) -> Option<&'static str> {
        match self {
            Self::Label => Some("34"),
            Self::Delimiter => Some("33"),
            Self::FormatList => Some("94"),
            Self::Heading => Some("93"),
            Self::Preview => Some("33"),
            Self::Preamble => Some("36"),
            Self::Content => Some("90"),
            Self::Warning => Some("91"),
            Self::Plain => None,
        }
    }
}

/// Receives report text
pub trait Presenter {
    /// Emit one segment with its emphasis
    fn emit(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn emit(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()> {
        (**self).emit(text, emphasis)
    }
}

/// When to use colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal and `NO_COLOR` is unset
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Parse a configured color mode; unknown values fall back to auto
    pub fn from_config(value: &str) -> Self {
        match value {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Writes the report to a stream, styling segments with ANSI escapes
pub struct ConsolePresenter<W: Write> {
    out: W,
    color: bool,
}

impl ConsolePresenter<io::Stdout> {
    /// Presenter on stdout
    pub fn stdout(mode: ColorMode) -> Self {
        let stdout = io::stdout();
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        };
        Self::new(stdout, color)
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Presenter on any writer
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Flush and return the writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn emit(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()> {
        match emphasis.ansi() {
            Some(sgr) if self.color && !text.is_empty() => {
                write!(self.out, "\x1b[{}m{}\x1b[0m", sgr, text)
            }
            _ => self.out.write_all(text.as_bytes()),
        }
    }
}

/// Collects segments in memory
#[derive(Debug, Default, Clone)]
pub struct CapturePresenter {
    /// Everything emitted so far
    pub segments: Vec<(String, Emphasis)>,
}

impl CapturePresenter {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// All emitted text concatenated, without styling
    pub fn text(&self) -> String {
        self.segments.iter().map(|(text, _)| text.as_str()).collect()
    }

    /// Text emitted with the given emphasis
    pub fn with_emphasis(&self, emphasis: Emphasis) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|(_, e)| *e == emphasis)
            .map(|(text, _)| text.as_str())
            .collect()
    }
}

impl Presenter for CapturePresenter {
    fn emit(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()> {
        self.segments.push((text.to_string(), emphasis));
        Ok(())
    }
}

/// `Formats: [a, b, c]`
pub fn write_formats<P: Presenter + ?Sized>(presenter: &mut P, formats: &[String]) -> io::Result<()> {
    presenter.emit("\n", Emphasis::Plain)?;
    presenter.emit("Formats: ", Emphasis::Label)?;
    presenter.emit("[", Emphasis::Delimiter)?;
    presenter.emit(&formats.join(", "), Emphasis::FormatList)?;
    presenter.emit("]", Emphasis::Delimiter)?;
    presenter.emit("\n", Emphasis::Plain)
}

/// Heading, optional byte preview, optional preamble, then `[content]`
pub fn write_item<P: Presenter + ?Sized>(presenter: &mut P, item: &RenderedItem) -> io::Result<()> {
    presenter.emit("\n", Emphasis::Plain)?;
    presenter.emit(
        &format!(
            "{} - {} chars ({})",
            item.format_name, item.byte_length, item.type_label
        ),
        Emphasis::Heading,
    )?;
    presenter.emit("\n", Emphasis::Plain)?;

    if let Some(preview) = &item.byte_preview {
        presenter.emit(&format!("Bytes 0..9 {{ {} }}", preview), Emphasis::Preview)?;
        presenter.emit("\n", Emphasis::Plain)?;
    }

    if let Some(preamble) = &item.preamble {
        presenter.emit(preamble, Emphasis::Preamble)?;
    }

    presenter.emit("[", Emphasis::Delimiter)?;
    presenter.emit(&item.content, Emphasis::Content)?;
    presenter.emit("]", Emphasis::Delimiter)?;
    presenter.emit("\n", Emphasis::Plain)
}

/// Report a format whose payload could not be read or rendered
pub fn write_failure<P: Presenter + ?Sized>(
    presenter: &mut P,
    format: &str,
    error: &ClipboardError,
) -> io::Result<()> {
    presenter.emit("\n", Emphasis::Plain)?;
    presenter.emit(&format!("{} - failed: {}", format, error), Emphasis::Warning)?;
    presenter.emit("\n", Emphasis::Plain)
}
