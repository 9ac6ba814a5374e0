//! Command-line clipboard backends
//!
//! Reads the clipboard through the standard helper tools:
//!
//! | Backend | List formats | Read one format |
//! |---------|--------------|-----------------|
//! | Wayland | `wl-paste --list-types` | `wl-paste --no-newline --type <fmt>` |
//! | X11 | `xclip -o -t TARGETS` | `xclip -o -t <fmt>` |
//!
//! `--primary` / `-selection primary` select the primary selection.

use std::process::{Command, Output};

use clipscope_core::source::materialize;
use clipscope_core::{ClipboardError, ClipboardResult, ClipboardSource, Payload};
use tracing::{debug, trace};

/// Which helper tool talks to the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// `wl-paste` from wl-clipboard
    Wayland,
    /// `xclip`
    X11,
}

impl BackendKind {
    /// Parse a configured backend name; "auto" inspects the environment
    pub fn from_config(name: &str) -> ClipboardResult<Self> {
        match name {
            "wayland" => Ok(Self::Wayland),
            "x11" => Ok(Self::X11),
            "auto" => Self::detect().ok_or_else(|| {
                ClipboardError::Backend(
                    "no display found (neither WAYLAND_DISPLAY nor DISPLAY is set)".to_string(),
                )
            }),
            other => Err(ClipboardError::InvalidConfig(format!(
                "unknown clipboard backend: {}",
                other
            ))),
        }
    }

    /// Pick a backend from the session environment
    pub fn detect() -> Option<Self> {
        Self::detect_from(
            std::env::var_os("WAYLAND_DISPLAY").is_some(),
            std::env::var_os("DISPLAY").is_some(),
        )
    }

    fn detect_from(wayland_display: bool, x_display: bool) -> Option<Self> {
        if wayland_display {
            Some(Self::Wayland)
        } else if x_display {
            Some(Self::X11)
        } else {
            None
        }
    }

    /// Helper program name
    pub fn program(self) -> &'static str {
        match self {
            Self::Wayland => "wl-paste",
            Self::X11 => "xclip",
        }
    }

    fn list_args(self, primary: bool) -> Vec<String> {
        match self {
            Self::Wayland => {
                let mut args = vec!["--list-types".to_string()];
                if primary {
                    args.push("--primary".to_string());
                }
                args
            }
            Self::X11 => vec![
                "-selection".to_string(),
                selection(primary).to_string(),
                "-o".to_string(),
                "-t".to_string(),
                "TARGETS".to_string(),
            ],
        }
    }

    fn read_args(self, format: &str, primary: bool) -> Vec<String> {
        match self {
            Self::Wayland => {
                let mut args = vec![
                    "--no-newline".to_string(),
                    "--type".to_string(),
                    format.to_string(),
                ];
                if primary {
                    args.push("--primary".to_string());
                }
                args
            }
            Self::X11 => vec![
                "-selection".to_string(),
                selection(primary).to_string(),
                "-o".to_string(),
                "-t".to_string(),
                format.to_string(),
            ],
        }
    }
}

fn selection(primary: bool) -> &'static str {
    if primary {
        "primary"
    } else {
        "clipboard"
    }
}

/// Clipboard reader backed by an external helper command
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    kind: BackendKind,
    primary: bool,
}

impl CommandClipboard {
    /// Create a reader for the given backend
    pub fn new(kind: BackendKind, primary: bool) -> Self {
        Self { kind, primary }
    }

    /// Backend in use
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    fn run(&self, args: &[String]) -> ClipboardResult<Output> {
        trace!("Running {} {:?}", self.kind.program(), args);
        Command::new(self.kind.program())
            .args(args)
            .output()
            .map_err(|e| ClipboardError::Backend(format!("failed to run {}: {}", self.kind.program(), e)))
    }
}

impl ClipboardSource for CommandClipboard {
    fn formats(&self) -> ClipboardResult<Vec<String>> {
        let output = self.run(&self.kind.list_args(self.primary))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Both tools fail when the selection is empty
            if stderr.contains("No selection") || stderr.contains("Nothing is copied") || stderr.is_empty() {
                debug!("Clipboard is empty");
                return Ok(Vec::new());
            }
            return Err(ClipboardError::Backend(format!(
                "{} exited with {}: {}",
                self.kind.program(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(parse_format_list(&output.stdout))
    }

    fn payload(&self, format: &str, auto_convert: bool) -> ClipboardResult<Option<Payload>> {
        let output = self.run(&self.kind.read_args(format, self.primary))?;

        if !output.status.success() {
            debug!(
                "No data for {}: {}",
                format,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }

        Ok(Some(materialize(format, output.stdout, auto_convert)))
    }
}

/// One format per line; blank lines dropped, order kept
fn parse_format_list(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
