//! Clipboard inspection
//!
//! Walks every format a [`ClipboardSource`] offers, renders each payload and
//! hands the result to a [`Presenter`].
//!
//! Only failing to enumerate formats or to write the report ends the run.
//! A format with no data is skipped; a payload that cannot be read or whose
//! image cannot be saved is reported on its own line and the walk continues.

use anyhow::{Context, Result};
use clipscope_core::{ClipboardSource, ImageSink, Renderer};
use tracing::{debug, info, warn};

use crate::report::{self, Presenter};

/// Outcome counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectSummary {
    /// Formats listed by the source
    pub formats: usize,
    /// Payloads rendered
    pub rendered: usize,
    /// Formats listed without data
    pub skipped: usize,
    /// Payloads that failed to read or render
    pub failed: usize,
}

/// Inspect every format of `source`.
pub fn inspect<S, I, P>(
    source: &S,
    renderer: &Renderer<I>,
    auto_convert: bool,
    presenter: &mut P,
) -> Result<InspectSummary>
where
    S: ClipboardSource + ?Sized,
    I: ImageSink,
    P: Presenter + ?Sized,
{
    let formats = source.formats().context("Failed to list clipboard formats")?;
    info!("Clipboard offers {} format(s)", formats.len());

    report::write_formats(presenter, &formats).context("Failed to write report")?;

    let mut summary = InspectSummary {
        formats: formats.len(),
        ..Default::default()
    };

    for format in &formats {
        let payload = match source.payload(format, auto_convert) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!("Skipping {}: no data", format);
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                warn!("Failed to read {}: {}", format, e);
                report::write_failure(presenter, format, &e).context("Failed to write report")?;
                summary.failed += 1;
                continue;
            }
        };

        match renderer.render(format, &payload) {
            Ok(item) => {
                report::write_item(presenter, &item).context("Failed to write report")?;
                summary.rendered += 1;
            }
            Err(e) => {
                warn!("Failed to render {}: {}", format, e);
                report::write_failure(presenter, format, &e).context("Failed to write report")?;
                summary.failed += 1;
            }
        }
    }

    info!(
        "Rendered {}, skipped {}, failed {}",
        summary.rendered, summary.skipped, summary.failed
    );
    Ok(summary)
}
