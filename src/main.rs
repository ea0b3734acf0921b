//! Command-line entry point for resolving effect icons.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use effect_icon_resolver::config::ResolverConfig;
use effect_icon_resolver::project::IconProjectLayout;
use effect_icon_resolver::report::{
    RenderOptions, ReportFormat, render_report, render_rerun_directives,
    render_suggestions_markdown,
};
use effect_icon_resolver::suggest::{collect_available_stems, suggest_synonyms};
use effect_icon_resolver::synonyms::BuiltinSynonyms;
use effect_icon_resolver::StorageTier;

/// Exit code used when `--fail-on-missing` is set and an icon is missing.
const MISSING_ICONS_EXIT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "effect-icons", version, about = "Resolve effect identifiers to icon assets")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to ./icons.config.json when present).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Identifier source document.
    #[arg(long, global = true, value_name = "FILE")]
    identifiers: Option<PathBuf>,

    /// Synonym source, highest precedence first. Replaces the configured list.
    #[arg(long = "synonyms", global = true, value_name = "FILE")]
    synonyms: Vec<PathBuf>,

    /// Storage tier as DIR:EXT, most preferred first. Replaces the configured tiers.
    #[arg(long = "tier", global = true, value_name = "DIR:EXT")]
    tiers: Vec<StorageTier>,

    /// Do not merge the built-in synonym set.
    #[arg(long, global = true)]
    no_builtin_synonyms: bool,

    /// Number of candidates listed for each missing icon.
    #[arg(long, global = true)]
    trace_limit: Option<usize>,

    /// Increase log verbosity.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve every identifier and print a report.
    Resolve {
        /// Report format.
        #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
        format: ReportFormat,
        /// Also list identifiers that resolved.
        #[arg(long)]
        show_found: bool,
        /// Exit with status 2 when any icon is missing.
        #[arg(long)]
        fail_on_missing: bool,
    },
    /// Print the ordered filename candidates for identifiers.
    Candidates {
        /// Identifiers to expand.
        #[arg(required = true, value_name = "IDENTIFIER")]
        ids: Vec<String>,
    },
    /// Suggest synonyms for missing identifiers by fuzzy-matching existing assets.
    Suggest {
        /// Write the suggested synonym JSON here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Minimum similarity score (0.0 - 1.0).
        #[arg(long)]
        threshold: Option<f64>,
        /// Print a Markdown review table to stdout.
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = if verbose > 0 { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "effect_icon_resolver={default_level},effect_icons={default_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let layout = load_layout(&cli)?;

    match cli.command {
        Command::Resolve {
            format,
            show_found,
            fail_on_missing,
        } => {
            let inputs = layout
                .load_inputs()
                .context("failed to load resolver inputs")?;
            let report = layout.resolver(inputs.table).run(&inputs.identifiers);

            let rendered = render_report(&report, format, RenderOptions { show_found })
                .context("failed to render report")?;
            if format == ReportFormat::Cargo {
                print!("{}", render_rerun_directives(&inputs.rerun_paths));
            }
            print!("{rendered}");

            if fail_on_missing && !report.is_complete() {
                return Ok(ExitCode::from(MISSING_ICONS_EXIT));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Candidates { ids } => {
            let table = layout
                .load_synonym_table()
                .context("failed to load synonym sources")?;
            let resolver = layout.resolver(table);

            let tiers: Vec<String> = resolver.tiers().iter().map(ToString::to_string).collect();
            println!("tiers: {}", tiers.join(", "));
            for identifier in &ids {
                println!("{identifier}:");
                if let Some(entry) = resolver.table().entry(identifier) {
                    println!("  synonym from {}: {}", entry.source, entry.stem);
                }
                for (index, candidate) in resolver.candidates(identifier).iter().enumerate() {
                    println!("  {:>2}. {candidate}", index + 1);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Suggest {
            output,
            threshold,
            markdown,
        } => {
            let inputs = layout
                .load_inputs()
                .context("failed to load resolver inputs")?;
            let report = layout.resolver(inputs.table).run(&inputs.identifiers);
            let stems = collect_available_stems(&layout.tiers);
            let threshold = threshold.unwrap_or(layout.suggestion_threshold);
            let suggestions = suggest_synonyms(&report.missing, &stems, threshold);

            tracing::info!(
                suggested = suggestions.entries.len(),
                unmatched = suggestions.unmatched.len(),
                "fuzzy synonym suggestions ready for review"
            );

            let json = suggestions
                .to_synonym_json()
                .context("failed to serialise suggestions")?;
            match &output {
                Some(path) => write_output(path, &json)?,
                None if !markdown => print!("{json}"),
                None => {}
            }
            if markdown {
                print!("{}", render_suggestions_markdown(&suggestions));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Build the runtime layout from the configuration file and command-line overrides.
fn load_layout(cli: &Cli) -> Result<IconProjectLayout> {
    let (config, base_dir) = match &cli.config {
        Some(path) => {
            let config = ResolverConfig::from_path(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            (config, ResolverConfig::base_dir_of(path))
        }
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            let config = ResolverConfig::discover(&cwd).context("failed to load configuration")?;
            (config, cwd)
        }
    };

    let mut layout = config.into_layout(&base_dir);

    if let Some(path) = &cli.identifiers {
        layout.identifiers_path = path.clone();
    }
    if !cli.synonyms.is_empty() {
        layout.synonym_paths = cli.synonyms.clone();
    }
    if !cli.tiers.is_empty() {
        layout.tiers = cli.tiers.clone();
    }
    if cli.no_builtin_synonyms {
        layout.builtin = BuiltinSynonyms::Suppress;
    }
    if let Some(limit) = cli.trace_limit {
        layout.trace_limit = limit;
    }

    tracing::debug!(
        identifiers = %layout.identifiers_path.display(),
        tiers = layout.tiers.len(),
        "resolved project layout"
    );
    Ok(layout)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    fn write_project(root: &Path, identifiers: Option<&str>) -> PathBuf {
        let config = root.join("icons.config.json");
        fs::write(
            &config,
            r#"{"synonyms": [], "tiers": [{"directory": "icons", "extension": "png"}]}"#,
        )
        .unwrap();
        fs::create_dir_all(root.join("icons")).unwrap();
        fs::write(root.join("icons/fire.png"), b"icon").unwrap();
        if let Some(identifiers) = identifiers {
            fs::write(root.join("effects.json"), identifiers).unwrap();
        }
        config
    }

    fn resolve_cli(config: &Path, extra: &[&str]) -> Cli {
        let config = config.to_str().expect("temp path is valid UTF-8");
        let mut args = vec!["effect-icons", "--config", config, "resolve"];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "effect-icons",
            "resolve",
            "--format",
            "markdown",
            "--tier",
            "optimized/48:webp",
            "--tier",
            "icons:png",
            "--no-builtin-synonyms",
        ])
        .unwrap();

        assert_eq!(cli.tiers, vec![
            StorageTier::new("optimized/48", "webp"),
            StorageTier::new("icons", "png"),
        ]);
        assert!(cli.no_builtin_synonyms);
        assert!(matches!(cli.command, Command::Resolve {
            format: ReportFormat::Markdown,
            ..
        }));
    }

    #[test]
    fn rejects_malformed_tiers() {
        assert!(Cli::try_parse_from(["effect-icons", "resolve", "--tier", "icons"]).is_err());
    }

    #[test]
    fn fail_on_missing_exits_with_status_two() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = write_project(temp.path(), Some(r#"["fire", "ice"]"#));

        let code = run(resolve_cli(&config, &["--fail-on-missing"])).unwrap();
        assert_eq!(code, ExitCode::from(MISSING_ICONS_EXIT));
    }

    #[test]
    fn missing_icons_succeed_without_fail_flag() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = write_project(temp.path(), Some(r#"["fire", "ice"]"#));

        assert_eq!(run(resolve_cli(&config, &[])).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn complete_resolution_succeeds_with_fail_flag() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = write_project(temp.path(), Some(r#"["fire"]"#));

        let code = run(resolve_cli(&config, &["--fail-on-missing"])).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn missing_identifier_source_is_an_error() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = write_project(temp.path(), None);

        let err = run(resolve_cli(&config, &["--fail-on-missing"])).unwrap_err();
        assert!(format!("{err:#}").contains("effects.json"));
    }
}
