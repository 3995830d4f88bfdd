//! CLI entry point for intlxml.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `intlxml-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use intlxml_app::{
    CheckInput, ConsoleOptions, ExplainOutput, parse_report_json, render_annotations,
    render_console, render_markdown, run_check, run_explain, runtime_error_report,
    serialize_report,
};
use intlxml_settings::Overrides;
use intlxml_types::IntlxmlReport;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Exit code for failures of the tool itself, as opposed to failing documents.
const EXIT_RUNTIME_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "intlxml",
    version,
    about = "Flag untranslated literal text in XML templates"
)]
struct Cli {
    /// Directory that target patterns and the config path are relative to.
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Path to the intlxml config TOML (missing file means defaults).
    #[arg(long, default_value = "intlxml.toml")]
    config: Utf8PathBuf,

    /// Log debug events to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check documents and print the per-file report.
    Check {
        /// Files or glob patterns to check instead of the configured targets.
        paths: Vec<String>,

        /// Only check this configured target (repeatable).
        #[arg(long = "target", value_name = "NAME")]
        targets: Vec<String>,

        /// Also check attribute values.
        #[arg(long)]
        check_attributes: bool,

        /// Override maximum findings to emit in the JSON report.
        #[arg(long)]
        max_findings: Option<u32>,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown report.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/intlxml/comment.md")]
        markdown_out: Utf8PathBuf,

        /// Disable colored output.
        #[arg(long)]
        no_color: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/intlxml/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/intlxml/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "intl.untranslated_text") or code (e.g., "literal_text").
        identifier: String,
    },
}

struct CheckArgs {
    paths: Vec<String>,
    targets: Vec<String>,
    check_attributes: bool,
    max_findings: Option<u32>,
    report_out: Option<Utf8PathBuf>,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            paths,
            targets,
            check_attributes,
            max_findings,
            report_out,
            write_markdown,
            markdown_out,
            no_color,
        } => cmd_check(
            &cli.root,
            &cli.config,
            CheckArgs {
                paths,
                targets,
                check_attributes,
                max_findings,
                report_out,
                write_markdown,
                markdown_out,
                no_color,
            },
        ),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(&report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_check(root: &Utf8Path, config: &Utf8Path, args: CheckArgs) -> anyhow::Result<()> {
    let root = root
        .canonicalize_utf8()
        .unwrap_or_else(|_| root.to_path_buf());

    let result = (|| -> anyhow::Result<i32> {
        if !root.exists() {
            anyhow::bail!("root does not exist: {root}");
        }
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_path = root.join(config);
        let cfg_text = match std::fs::read_to_string(&cfg_path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %cfg_path, "no config file, using defaults");
                String::new()
            }
            Err(err) => return Err(err).with_context(|| format!("read config: {cfg_path}")),
        };

        let overrides = Overrides {
            paths: args.paths.clone(),
            targets: args.targets.clone(),
            check_attributes: args.check_attributes.then_some(true),
            max_findings: args.max_findings,
        };

        let output = run_check(CheckInput {
            root: &root,
            config_text: &cfg_text,
            overrides,
        })?;

        let options = if args.no_color {
            ConsoleOptions { color: false }
        } else {
            ConsoleOptions::default()
        };
        print!("{}", render_console(&output.console, options));

        if let Some(report_out) = &args.report_out {
            write_report_file(report_out, &output.report).context("write report json")?;
        }
        if args.write_markdown {
            let md = render_markdown(&output.report);
            write_text_file(&args.markdown_out, &md).context("write markdown")?;
        }

        Ok(output.outcome_code())
    })();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => {
            let _ = std::io::stdout().flush();
            std::process::exit(code)
        }
        Err(err) => {
            if let Some(report_out) = &args.report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report_file(report_out, &report);
            }
            eprintln!("intlxml error: {err:#}");
            std::process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &IntlxmlReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<IntlxmlReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {path}"))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&report);

    match output {
        Some(out_path) => write_text_file(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for annotation in render_annotations(&report, max) {
        println!("{annotation}");
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", intlxml_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                intlxml_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
