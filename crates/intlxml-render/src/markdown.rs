use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# intlxml report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Documents: {} scanned, {} failed, {} not parsed\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.documents_scanned,
        report.data.documents_failed,
        report.data.parse_errors,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {r}\n\n"));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        let check_id = f.check_id.as_deref().unwrap_or("");
        match &f.location {
            Some(loc) => {
                let mut at = format!("`{}`", loc.path);
                if let Some(line) = loc.line {
                    at.push_str(&format!(":{line}"));
                }
                out.push_str(&format!(
                    "- [{}] `{}` / `{}`: {} ({})\n",
                    sev, check_id, f.code, f.message, at
                ));
            }
            None => {
                out.push_str(&format!(
                    "- [{}] `{}` / `{}`: {}\n",
                    sev, check_id, f.code, f.message
                ));
            }
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {help}\n"));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {url}\n"));
        }
    }

    out
}
