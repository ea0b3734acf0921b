use std::fmt::Write as _;
use std::path::PathBuf;

use crate::models::ResolutionReport;

use super::RenderOptions;

/// Plain-text summary with aligned identifier columns.
pub fn render_console(report: &ResolutionReport, options: RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Effect icons: {} resolved, {} missing ({} total)",
        report.found.len(),
        report.missing.len(),
        report.total()
    );

    if options.show_found && !report.found.is_empty() {
        let width = column_width(report.found.iter().map(|icon| icon.identifier.as_str()));
        out.push_str("\nResolved:\n");
        for icon in &report.found {
            let _ = writeln!(
                out,
                "  {:<width$}  -> {} [{}]",
                icon.identifier,
                icon.path.display(),
                icon.stem
            );
        }
    }

    if !report.missing.is_empty() {
        let width = column_width(report.missing.iter().map(|icon| icon.identifier.as_str()));
        out.push_str("\nMissing:\n");
        for icon in &report.missing {
            let tried = if icon.tried.is_empty() {
                "(no candidates)".to_string()
            } else {
                icon.tried.join(", ")
            };
            let _ = writeln!(out, "  {:<width$}  tried: {}", icon.identifier, tried);
        }
    }

    out
}

/// One `cargo:warning=` line per missing icon.
pub fn render_cargo_warnings(report: &ResolutionReport) -> String {
    report
        .missing
        .iter()
        .map(|icon| {
            format!(
                "cargo:warning=Missing effect icon '{}' (tried: {})\n",
                icon.identifier,
                icon.tried.join(", ")
            )
        })
        .collect()
}

/// One `cargo:rerun-if-changed=` line per input path.
pub fn render_rerun_directives(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("cargo:rerun-if-changed={}\n", path.display()))
        .collect()
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|value| value.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResolutionResult;

    fn report() -> ResolutionReport {
        let mut report = ResolutionReport::default();
        report.record("bait_switch", ResolutionResult::Found {
            path: PathBuf::from("optimized/48/baitandswitch.webp"),
            stem: "baitandswitch".into(),
        });
        report.record("Maneki-Neko", ResolutionResult::Missing {
            tried: vec!["maneki-neko".into(), "maneki_neko".into()],
        });
        report.record("x", ResolutionResult::Missing { tried: Vec::new() });
        report.sort();
        report
    }

    #[test]
    fn lists_missing_icons_with_aligned_traces() {
        let text = render_console(&report(), RenderOptions::default());

        assert!(text.starts_with("Effect icons: 1 resolved, 2 missing (3 total)\n"));
        assert!(text.contains("  Maneki-Neko  tried: maneki-neko, maneki_neko\n"));
        assert!(text.contains("  x            tried: (no candidates)\n"));
        assert!(!text.contains("Resolved:"));
    }

    #[test]
    fn lists_found_icons_on_request() {
        let text = render_console(&report(), RenderOptions { show_found: true });
        assert!(text.contains("Resolved:\n  bait_switch  -> optimized/48/baitandswitch.webp [baitandswitch]\n"));
    }

    #[test]
    fn emits_cargo_warnings_for_missing_icons_only() {
        let text = render_cargo_warnings(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "cargo:warning=Missing effect icon 'Maneki-Neko' (tried: maneki-neko, maneki_neko)",
            "cargo:warning=Missing effect icon 'x' (tried: )",
        ]);
    }

    #[test]
    fn emits_rerun_directives_per_path() {
        let paths = [PathBuf::from("effects.json"), PathBuf::from("icons")];
        assert_eq!(
            render_rerun_directives(&paths),
            "cargo:rerun-if-changed=effects.json\ncargo:rerun-if-changed=icons\n"
        );
    }
}
