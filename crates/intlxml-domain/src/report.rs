use intlxml_types::{Finding, IntlxmlData, RepoPath, Verdict};

/// Result of evaluating one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub path: RepoPath,
    pub target: String,
    pub strings_checked: u32,
    /// Trimmed illegal strings, in collection order.
    pub failures: Vec<String>,
    /// Read or parse error message when the document has no tree.
    pub load_error: Option<String>,
}

impl DocumentOutcome {
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Run-wide counters, folded from per-document outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub documents_scanned: u32,
    pub documents_failed: u32,
    pub strings_checked: u32,
    pub parse_errors: u32,
}

impl From<&DocumentOutcome> for Tally {
    /// A failing document counts once however many strings failed.
    fn from(outcome: &DocumentOutcome) -> Self {
        Tally {
            documents_scanned: 1,
            documents_failed: u32::from(outcome.failed()),
            strings_checked: outcome.strings_checked,
            parse_errors: u32::from(outcome.load_error.is_some()),
        }
    }
}

impl Tally {
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            documents_scanned: self.documents_scanned.saturating_add(other.documents_scanned),
            documents_failed: self.documents_failed.saturating_add(other.documents_failed),
            strings_checked: self.strings_checked.saturating_add(other.strings_checked),
            parse_errors: self.parse_errors.saturating_add(other.parse_errors),
        }
    }

    /// 0 when every document is legal, 1 otherwise.
    pub fn outcome_code(&self) -> i32 {
        if self.documents_failed > 0 { 1 } else { 0 }
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: IntlxmlData,
    pub tally: Tally,
    pub documents: Vec<DocumentOutcome>,
}
