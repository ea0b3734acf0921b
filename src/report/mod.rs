//! Presentation of resolution reports and fuzzy suggestions.
//!
//! Rendering is kept apart from resolution: every renderer works from the same
//! [`ResolutionReport`] structure, so callers can pick the output that suits a terminal, a
//! pull-request comment, a machine consumer or a cargo build script.

mod console;
mod markdown;

use clap::ValueEnum;

pub use console::{render_cargo_warnings, render_console, render_rerun_directives};
pub use markdown::{render_markdown, render_suggestions_markdown};

use crate::models::ResolutionReport;

/// Output formats supported by [`render_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned plain-text listing.
    #[default]
    Console,
    /// Markdown two-column table of identifiers and candidates.
    Markdown,
    /// Pretty-printed JSON document.
    Json,
    /// `cargo:warning=` lines for build scripts.
    Cargo,
}

/// Rendering switches shared by the text formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Also list identifiers that resolved.
    pub show_found: bool,
}

/// Render `report` in the requested format.
pub fn render_report(
    report: &ResolutionReport,
    format: ReportFormat,
    options: RenderOptions,
) -> serde_json::Result<String> {
    Ok(match format {
        ReportFormat::Console => render_console(report, options),
        ReportFormat::Markdown => render_markdown(report, options),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
        ReportFormat::Cargo => render_cargo_warnings(report),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResolutionResult;
    use std::path::PathBuf;

    #[test]
    fn renders_json_with_both_partitions() {
        let mut report = ResolutionReport::default();
        report.record("fire", ResolutionResult::Found {
            path: PathBuf::from("icons/fire.png"),
            stem: "fire".into(),
        });
        report.record("ice", ResolutionResult::Missing {
            tried: vec!["ice".into()],
        });

        let json = render_report(&report, ReportFormat::Json, RenderOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["found"][0]["stem"], "fire");
        assert_eq!(value["missing"][0]["identifier"], "ice");
        assert_eq!(value["missing"][0]["tried"][0], "ice");
    }
}
