use crate::collect::collect_leaves;
use crate::fingerprint::fingerprint_for_text;
use crate::legality::is_legal;
use crate::model::{BatchModel, DocumentModel, LoadFailure, LoadFailureKind};
use crate::policy::EffectiveConfig;
use crate::report::{DocumentOutcome, DomainReport, Tally};
use intlxml_types::{Finding, IntlxmlData, Location, RepoPath, Severity, Verdict, ids};
use serde_json::json;
use std::collections::BTreeMap;

const LITERAL_TEXT_HELP: &str = "Wrap this string in a ${gs.getMessage()} jelly script or equivalent to make it international-friendly.";
const PARSE_HELP: &str = "Fix the markup so the document parses; its text was not checked.";

/// Trim each leaf and keep the ones that fail classification, in input order.
pub fn evaluate_texts<'a, I>(leaves: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    leaves
        .into_iter()
        .map(|text| text.trim_matches(is_trim_whitespace))
        .filter(|text| !is_legal(text))
        .map(str::to_string)
        .collect()
}

/// Whitespace as ECMAScript `String.prototype.trim` defines it: Unicode `White_Space` minus
/// U+0085, plus the U+FEFF byte order mark.
fn is_trim_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

pub fn evaluate_document(document: &DocumentModel, cfg: &EffectiveConfig) -> DocumentOutcome {
    let leaves = collect_leaves(&document.tree, &cfg.collect);
    let strings_checked = saturating_u32(leaves.len());
    DocumentOutcome {
        path: document.path.clone(),
        target: document.target.clone(),
        strings_checked,
        failures: evaluate_texts(leaves),
        load_error: document.failure.as_ref().map(|f| f.message.clone()),
    }
}

pub fn evaluate(model: &BatchModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();
    let mut documents = Vec::with_capacity(model.documents.len());

    for document in &model.documents {
        if let Some(failure) = &document.failure {
            findings.push(load_failure_finding(&document.path, failure));
        }

        let outcome = evaluate_document(document, cfg);
        push_text_findings(&outcome, &mut findings);
        documents.push(outcome);
    }

    let tally = documents
        .iter()
        .map(Tally::from)
        .fold(Tally::default(), Tally::merge);

    let total = saturating_u32(findings.len());
    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let data = IntlxmlData {
        targets: model.targets.clone(),
        documents_scanned: tally.documents_scanned,
        documents_failed: tally.documents_failed,
        strings_checked: tally.strings_checked,
        parse_errors: tally.parse_errors,
        findings_total: total,
        findings_emitted: saturating_u32(emitted.len()),
        truncated_reason,
    };

    DomainReport {
        verdict: compute_verdict(&tally),
        findings: emitted,
        data,
        tally,
        documents,
    }
}

fn compute_verdict(tally: &Tally) -> Verdict {
    if tally.documents_failed > 0 {
        return Verdict::Fail;
    }
    if tally.parse_errors > 0 {
        return Verdict::Warn;
    }
    Verdict::Pass
}

fn push_text_findings(outcome: &DocumentOutcome, out: &mut Vec<Finding>) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

    for text in &outcome.failures {
        let occurrence = seen.entry(text.as_str()).or_insert(0);
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_INTL_UNTRANSLATED_TEXT.to_string(),
            code: ids::CODE_LITERAL_TEXT.to_string(),
            message: format!("untranslated text: {text}"),
            location: Some(Location::file(outcome.path.clone())),
            help: Some(LITERAL_TEXT_HELP.to_string()),
            url: None,
            fingerprint: Some(fingerprint_for_text(
                ids::CHECK_INTL_UNTRANSLATED_TEXT,
                ids::CODE_LITERAL_TEXT,
                outcome.path.as_str(),
                text,
                *occurrence,
            )),
            data: json!({
                "text": text,
                "document": outcome.path.as_str(),
                "target": outcome.target,
            }),
        });
        *occurrence += 1;
    }
}

fn load_failure_finding(path: &RepoPath, failure: &LoadFailure) -> Finding {
    let code = match failure.kind {
        LoadFailureKind::Read => ids::CODE_READ_ERROR,
        LoadFailureKind::Parse => ids::CODE_PARSE_ERROR,
    };
    Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_INTL_XML_PARSE.to_string(),
        code: code.to_string(),
        message: failure.message.clone(),
        location: Some(Location {
            path: path.clone(),
            line: failure.line,
            col: failure.col,
        }),
        help: Some(PARSE_HELP.to_string()),
        url: None,
        fingerprint: None,
        data: json!({ "document": path.as_str() }),
    }
}
