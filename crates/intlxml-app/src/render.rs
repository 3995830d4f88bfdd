//! Render use cases: terminal, Markdown, and GitHub annotations from in-memory reports.

use crate::report::to_renderable;
use intlxml_render::{ConsoleOptions, ConsoleSummary};
use intlxml_types::IntlxmlReport;

pub fn render_console(summary: &ConsoleSummary, options: ConsoleOptions) -> String {
    intlxml_render::render_console(summary, options)
}

pub fn render_markdown(report: &IntlxmlReport) -> String {
    intlxml_render::render_markdown(&to_renderable(report))
}

pub fn render_annotations(report: &IntlxmlReport, max: usize) -> Vec<String> {
    intlxml_render::render_github_annotations(&to_renderable(report))
        .into_iter()
        .take(max)
        .collect()
}
