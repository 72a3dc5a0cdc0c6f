use anyhow::Result;
use figtext_core::{FigText, FigTextMode, DEFAULT_PARAGRAPH_BOUNDARY};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DocumentReport<'a> {
    pub source: String,
    pub mode: FigTextMode,
    pub items: Vec<FigText<'a>>,
}

/// Items separated by blank lines, so the output splits back into the same units.
pub fn render_plain(items: &[FigText<'_>]) -> String {
    items
        .iter()
        .map(FigText::as_str)
        .collect::<Vec<_>>()
        .join(DEFAULT_PARAGRAPH_BOUNDARY)
}

pub fn render_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
