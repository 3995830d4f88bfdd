use crate::ConsoleSummary;
use console::style;

const REMEDIATION_HINT: &str = "Please wrap these strings in a ${gs.getMessage()} jelly script or equivalent to make them international-friendly.";

#[derive(Clone, Copy, Debug)]
pub struct ConsoleOptions {
    /// Emit ANSI colors. When false the output is plain text regardless of the terminal.
    pub color: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            color: console::colors_enabled(),
        }
    }
}

/// Render the per-document terminal report.
///
/// Documents that loaded and passed print nothing. A document that failed to load prints a
/// `Compile Error...` header followed by the error detail.
pub fn render_console(summary: &ConsoleSummary, options: ConsoleOptions) -> String {
    let mut out = String::new();
    let color = options.color;

    for doc in &summary.documents {
        let path = style(doc.path.as_str()).magenta().bold().force_styling(color);

        if let Some(err) = &doc.load_error {
            out.push_str(&format!(
                "{} - {}\n",
                path,
                style("Compile Error...").red().force_styling(color)
            ));
            out.push_str(&format!(
                "{}\n",
                style(format!(">> {err}")).red().force_styling(color)
            ));
        }

        if doc.failures.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "{} - {}\n",
            path,
            style(format!("{} issue(s)", doc.failures.len()))
                .red()
                .force_styling(color)
        ));
        for text in &doc.failures {
            out.push_str(&format!(
                "\t{}{}\n",
                style("* ").red().force_styling(color),
                text
            ));
        }
    }

    if summary.documents_failed > 0 {
        out.push_str(&format!(
            "{}\n{}\n",
            style(format!("{} files have failed.", summary.documents_failed))
                .red()
                .force_styling(color),
            style(REMEDIATION_HINT).red().force_styling(color)
        ));
    } else {
        out.push_str(&format!(
            "{}\n",
            style("Complete! :)").green().force_styling(color)
        ));
    }

    out
}
