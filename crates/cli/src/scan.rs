//! Batch mode: run fig text extraction over every matching file in a directory.

use crate::input::read_text;
use anyhow::Result;
use figtext_core::{FigText, FigTextExtractor, FigTextKind, FigTextMode, DEFAULT_PARAGRAPH_BOUNDARY};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Owned copy of a [`FigText`] so it outlives the file's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanItem {
    pub kind: FigTextKind,
    pub text: String,
}

impl From<&FigText<'_>> for ScanItem {
    fn from(item: &FigText<'_>) -> Self {
        ScanItem {
            kind: item.kind(),
            text: item.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub paragraphs: usize,
    pub items: Vec<ScanItem>,
}

impl FileReport {
    /// Items separated by blank lines, as in single-document output.
    pub fn render_plain(&self) -> String {
        self.items
            .iter()
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
            .join(DEFAULT_PARAGRAPH_BOUNDARY)
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ScanSummary {
    pub files: Vec<FileReport>,
    pub skipped: Vec<String>,
}

pub fn collect_files(root: &Path, include: &[String], exclude: &[String]) -> Result<Vec<PathBuf>> {
    let include_set = build_globset(include)?;
    let exclude_set = build_globset(exclude)?;
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e.path()) || e.depth() == 0)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(root = %root.display(), error = %err, "walk error");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || exclude_set.is_match(path) {
            continue;
        }
        if include.is_empty() || include_set.is_match(path) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

pub fn scan_dir(
    root: &Path,
    include: &[String],
    exclude: &[String],
    extractor: &FigTextExtractor,
    mode: FigTextMode,
) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();
    for path in collect_files(root, include, exclude)? {
        let path_str = path.to_string_lossy().into_owned();
        let text = match read_text(Some(&path)) {
            Ok(t) => t,
            Err(err) => {
                warn!(path = %path_str, error = %format!("{err:#}"), "skipping unreadable file");
                summary.skipped.push(path_str);
                continue;
            }
        };
        let items = extractor.extract_all(&text, mode);
        info!(path = %path_str, items = items.len(), "extracted fig text");
        summary.files.push(FileReport {
            paragraphs: extractor.paragraphs(&text).count(),
            items: items.iter().map(ScanItem::from).collect(),
            path: path_str,
        });
    }
    Ok(summary)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat)?);
    }
    Ok(builder.build()?)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
