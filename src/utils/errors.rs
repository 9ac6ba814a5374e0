//! User-Friendly Error Formatting
//!
//! Provides user-friendly error messages with troubleshooting hints
//! for common error scenarios.

use std::fmt::Write;

/// Format error for user consumption
///
/// Takes technical error and produces user-friendly message with
/// troubleshooting steps and context.
pub fn format_user_error(error: &anyhow::Error) -> String {
    let mut output = String::new();

    // Header
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "╔════════════════════════════════════════════════════════════╗"
    )
    .ok();
    writeln!(
        &mut output,
        "║                     ERROR                                  ║"
    )
    .ok();
    writeln!(
        &mut output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();
    writeln!(&mut output).ok();

    // Analyze error and provide context
    let error_msg = format!("{:#}", error);

    if error_msg.contains("wl-paste") || error_msg.contains("xclip") || error_msg.contains("display") {
        format_backend_error(&mut output, &error_msg);
    } else if error_msg.contains("config") || error_msg.contains("Invalid") {
        format_config_error(&mut output, &error_msg);
    } else if error_msg.contains("report") {
        format_output_error(&mut output, &error_msg);
    } else {
        format_generic_error(&mut output, &error_msg);
    }

    // Technical details
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(&mut output, "Technical Details:").ok();
    writeln!(&mut output).ok();
    writeln!(&mut output, "{:#}", error).ok();
    writeln!(&mut output).ok();

    // Footer with help
    writeln!(
        &mut output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(&mut output, "Need Help?").ok();
    writeln!(
        &mut output,
        "  - Run with --verbose for detailed logs: clipscope -vvv"
    )
    .ok();
    writeln!(
        &mut output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();

    output
}

fn format_backend_error(output: &mut String, _error: &str) {
    writeln!(output, "Clipboard Access Error").ok();
    writeln!(output).ok();
    writeln!(output, "Could not read the clipboard.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Helper tool not installed").ok();
    writeln!(output, "     → Wayland: sudo apt install wl-clipboard").ok();
    writeln!(output, "     → X11: sudo apt install xclip").ok();
    writeln!(output).ok();
    writeln!(output, "  2. No graphical session").ok();
    writeln!(
        output,
        "     → Check: echo $WAYLAND_DISPLAY $DISPLAY (one should be set)"
    )
    .ok();
    writeln!(
        output,
        "     → Over SSH, forward the display or pick one: --backend x11"
    )
    .ok();
}

fn format_config_error(output: &mut String, _error: &str) {
    writeln!(output, "Configuration Error").ok();
    writeln!(output).ok();
    writeln!(output, "Problem with configuration file or options.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Invalid TOML syntax").ok();
    writeln!(output, "     → Check for typos, missing quotes, etc.").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Unsupported value").ok();
    writeln!(output, "     → backend: auto | wayland | x11").ok();
    writeln!(output, "     → color: auto | always | never").ok();
    writeln!(output).ok();
    writeln!(output, "  3. Image directory does not exist").ok();
    writeln!(output, "     → Create it or drop image_dir to use the temp directory").ok();
}

fn format_output_error(output: &mut String, _error: &str) {
    writeln!(output, "Output Error").ok();
    writeln!(output).ok();
    writeln!(output, "The report could not be written to stdout.").ok();
    writeln!(output).ok();
    writeln!(output, "  → Was the output piped into a command that exited early?").ok();
}

fn format_generic_error(output: &mut String, error: &str) {
    writeln!(output, "Inspection Error").ok();
    writeln!(output).ok();
    writeln!(output, "An error occurred while inspecting the clipboard.").ok();
    writeln!(output).ok();
    writeln!(output, "Error: {}", error).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_user_error() {
        let error = anyhow::anyhow!("backend error: failed to run wl-paste: No such file or directory");
        let formatted = format_user_error(&error);
        assert!(formatted.contains("ERROR"));
        assert!(formatted.contains("Clipboard Access Error"));
        assert!(formatted.contains("wl-clipboard"));
    }

    #[test]
    fn test_config_error_formatting() {
        let error = anyhow::anyhow!("Invalid clipboard backend: win32");
        let formatted = format_user_error(&error);
        assert!(formatted.contains("Configuration Error"));
        assert!(formatted.contains("win32"));
    }

    #[test]
    fn test_context_chain_is_included() {
        let error = anyhow::anyhow!("broken pipe").context("Failed to write report");
        let formatted = format_user_error(&error);
        assert!(formatted.contains("Output Error"));
        assert!(formatted.contains("Failed to write report: broken pipe"));
    }
}
