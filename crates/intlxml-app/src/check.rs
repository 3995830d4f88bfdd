//! The `check` use case: expand targets, evaluate every document, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use intlxml_domain::report::{DocumentOutcome, DomainReport, Tally};
use intlxml_render::{ConsoleDocument, ConsoleSummary};
use intlxml_settings::{IntlxmlConfigV1, Overrides, ResolvedConfig};
use intlxml_types::{IntlxmlReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Directory that target patterns are relative to.
    pub root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report (findings possibly truncated).
    pub report: IntlxmlReport,
    /// Per-document view for the terminal sink, never truncated.
    pub console: ConsoleSummary,
    pub tally: Tally,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

impl CheckOutput {
    /// Process exit code: 0 when no document failed, 1 otherwise.
    pub fn outcome_code(&self) -> i32 {
        self.tally.outcome_code()
    }
}

/// Run the check use case: parse config, expand targets, load documents, evaluate, report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        IntlxmlConfigV1::default()
    } else {
        intlxml_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        intlxml_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    tracing::debug!(
        targets = ?resolved.targets.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        ignore_tags = ?resolved.effective.collect.ignore.iter().collect::<Vec<_>>(),
        check_attributes = resolved.effective.collect.attributes,
        max_findings = resolved.effective.max_findings,
        "resolved config"
    );

    if !input.root.is_dir() {
        anyhow::bail!("root is not a directory: {}", input.root);
    }

    let groups = resolved
        .targets
        .iter()
        .map(|t| intlxml_repo::discover_group(input.root, &t.name, &t.patterns))
        .collect::<anyhow::Result<Vec<_>>>()
        .context("discover documents")?;

    let model = intlxml_repo::build_batch_model(input.root, &groups);
    let DomainReport {
        verdict,
        findings,
        data,
        tally,
        documents,
    } = intlxml_domain::evaluate(&model, &resolved.effective);

    tracing::info!(
        documents = tally.documents_scanned,
        failed = tally.documents_failed,
        parse_errors = tally.parse_errors,
        "check finished"
    );

    let finished_at = OffsetDateTime::now_utc();
    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "intlxml".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        console: console_summary(&documents, &tally),
        tally,
        resolved_config: resolved,
    })
}

fn console_summary(documents: &[DocumentOutcome], tally: &Tally) -> ConsoleSummary {
    ConsoleSummary {
        documents: documents
            .iter()
            .map(|d| ConsoleDocument {
                path: d.path.as_str().to_string(),
                failures: d.failures.clone(),
                load_error: d.load_error.clone(),
            })
            .collect(),
        documents_failed: tally.documents_failed,
    }
}
