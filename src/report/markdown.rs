use std::fmt::Write as _;

use crate::models::ResolutionReport;
use crate::suggest::Suggestions;

use super::RenderOptions;

/// Markdown document with a two-column table of missing identifiers and the candidates that
/// were tried, ready to paste into an issue when authoring synonyms.
pub fn render_markdown(report: &ResolutionReport, options: RenderOptions) -> String {
    let mut out = String::from("## Effect icon resolution\n\n");

    if report.missing.is_empty() {
        let _ = writeln!(out, "All {} effect icons resolved.", report.total());
    } else {
        let _ = writeln!(
            out,
            "{} of {} effect icons have no matching asset.\n",
            report.missing.len(),
            report.total()
        );
        out.push_str("| Effect | Suggested candidates |\n| --- | --- |\n");
        for icon in &report.missing {
            let candidates = if icon.tried.is_empty() {
                "_none_".to_string()
            } else {
                icon.tried
                    .iter()
                    .map(|candidate| code(candidate))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(out, "| {} | {} |", code(&icon.identifier), candidates);
        }
    }

    if options.show_found && !report.found.is_empty() {
        out.push_str("\n| Effect | Icon |\n| --- | --- |\n");
        for icon in &report.found {
            let _ = writeln!(
                out,
                "| {} | {} |",
                code(&icon.identifier),
                code(&icon.path.display().to_string())
            );
        }
    }

    out
}

/// Markdown review table for fuzzy synonym suggestions.
pub fn render_suggestions_markdown(suggestions: &Suggestions) -> String {
    let mut out = String::from("## Suggested effect icon synonyms\n\n");

    if suggestions.entries.is_empty() {
        out.push_str("No suggestions above the similarity threshold.\n");
    } else {
        out.push_str("| Effect | Suggested stem | Score |\n| --- | --- | --- |\n");
        for suggestion in &suggestions.entries {
            let _ = writeln!(
                out,
                "| {} | {} | {:.2} |",
                code(&suggestion.identifier),
                code(&suggestion.stem),
                suggestion.score
            );
        }
    }

    if !suggestions.unmatched.is_empty() {
        let unmatched: Vec<String> = suggestions
            .unmatched
            .iter()
            .map(|identifier| code(identifier))
            .collect();
        let _ = write!(out, "\nNo close match: {}\n", unmatched.join(", "));
    }

    out
}

/// Wrap a value in a code span that survives inside a table cell.
fn code(value: &str) -> String {
    let escaped = value.replace('|', "\\|");
    if escaped.contains('`') {
        format!("`` {escaped} ``")
    } else {
        format!("`{escaped}`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResolutionResult;
    use crate::suggest::Suggestion;
    use std::path::PathBuf;

    #[test]
    fn renders_missing_icons_as_two_column_table() {
        let mut report = ResolutionReport::default();
        report.record("bait_switch", ResolutionResult::Found {
            path: PathBuf::from("icons/bait.png"),
            stem: "bait".into(),
        });
        report.record("Maneki-Neko", ResolutionResult::Missing {
            tried: vec!["maneki-neko".into(), "maneki neko".into()],
        });
        report.record("a|b", ResolutionResult::Missing { tried: Vec::new() });
        report.sort();

        let text = render_markdown(&report, RenderOptions::default());

        assert!(text.contains("2 of 3 effect icons have no matching asset."));
        assert!(text.contains("| Effect | Suggested candidates |\n| --- | --- |\n"));
        assert!(text.contains("| `Maneki-Neko` | `maneki-neko`, `maneki neko` |\n"));
        assert!(text.contains("| `a\\|b` | _none_ |\n"));
        assert!(!text.contains("| Effect | Icon |"));
    }

    #[test]
    fn renders_found_table_on_request() {
        let mut report = ResolutionReport::default();
        report.record("fire", ResolutionResult::Found {
            path: PathBuf::from("icons/fire.png"),
            stem: "fire".into(),
        });

        let text = render_markdown(&report, RenderOptions { show_found: true });
        assert!(text.contains("All 1 effect icons resolved."));
        assert!(text.contains("| `fire` | `icons/fire.png` |\n"));
    }

    #[test]
    fn renders_suggestion_review_table() {
        let suggestions = Suggestions {
            entries: vec![Suggestion {
                identifier: "bait_switch".into(),
                stem: "baitswitch".into(),
                score: 0.9567,
            }],
            unmatched: vec!["zzz".into()],
        };

        let text = render_suggestions_markdown(&suggestions);
        assert!(text.contains("| `bait_switch` | `baitswitch` | 0.96 |\n"));
        assert!(text.contains("No close match: `zzz`\n"));
    }

    #[test]
    fn uses_double_backticks_for_values_with_backticks() {
        assert_eq!(code("a`b"), "`` a`b ``");
    }
}
