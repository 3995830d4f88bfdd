#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: Option<String>,
    pub code: String,
    pub message: String,
    pub location: Option<RenderableLocation>,
    pub help: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub documents_scanned: u32,
    pub documents_failed: u32,
    pub parse_errors: u32,
    pub findings_emitted: u32,
    pub findings_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

/// One evaluated document as the terminal sink sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsoleDocument {
    pub path: String,
    /// Trimmed failing strings, in collection order.
    pub failures: Vec<String>,
    pub load_error: Option<String>,
}

/// Everything the terminal sink prints for one run. Unlike the JSON report this is never
/// truncated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsoleSummary {
    pub documents: Vec<ConsoleDocument>,
    pub documents_failed: u32,
}
