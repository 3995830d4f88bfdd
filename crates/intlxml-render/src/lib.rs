//! Rendering utilities for the terminal and CI surfaces (Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod terminal;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    ConsoleDocument, ConsoleSummary, RenderableData, RenderableFinding, RenderableLocation,
    RenderableReport, RenderableSeverity, RenderableVerdictStatus,
};
pub use terminal::{ConsoleOptions, render_console};
