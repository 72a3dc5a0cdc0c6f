//! Merges command-line overrides into the loaded config.

use anyhow::{Context, Result};
use figtext_core::config::{AppConfig, ExtractOptions};
use figtext_core::FigTextMode;

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub boundary: Option<String>,
    pub num_words: Option<i64>,
    pub mode: Option<FigTextMode>,
}

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub options: ExtractOptions,
    pub mode: FigTextMode,
}

pub fn resolve(cfg: &AppConfig, overrides: &Overrides) -> Result<RunSettings> {
    let mut text = cfg.text.clone();
    if let Some(boundary) = &overrides.boundary {
        text.paragraph_boundary = unescape(boundary);
    }
    if let Some(n) = overrides.num_words {
        text.num_words = n;
    }
    if let Some(mode) = overrides.mode {
        text.mode = mode;
    }
    let options = text.validate().context("invalid text settings")?;
    Ok(RunSettings {
        options,
        mode: text.mode,
    })
}

/// Expands `\n`, `\r`, `\t` and `\\` so a boundary can be typed on a shell line.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
