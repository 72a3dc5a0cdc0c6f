//! Figure/table text drawn from a document: legends, whole paragraphs that
//! mention figures, or word windows around the mentions.

use crate::blurbs::{figure_blurbs, WindowWidth};
use crate::config::ExtractOptions;
use crate::error::FigTextError;
use crate::paragraphs::{paragraphs, Paragraphs};
use crate::patterns::{has_reference, is_legend};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigTextMode {
    /// Legend paragraphs only.
    Legends,
    /// Legends plus every paragraph that mentions a figure or table.
    Paragraphs,
    /// Legends plus word windows around figure/table mentions.
    #[default]
    Words,
}

impl FigTextMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FigTextMode::Legends => "legends",
            FigTextMode::Paragraphs => "paragraphs",
            FigTextMode::Words => "words",
        }
    }
}

impl fmt::Display for FigTextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigTextMode {
    type Err = FigTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legends" => Ok(FigTextMode::Legends),
            "paragraphs" => Ok(FigTextMode::Paragraphs),
            "words" => Ok(FigTextMode::Words),
            _ => Err(FigTextError::UnknownMode(s.to_string())),
        }
    }
}

/// One unit of fig text handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum FigText<'a> {
    Legend(&'a str),
    Paragraph(&'a str),
    /// All blurbs of one paragraph, joined by a single space.
    Blurbs(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigTextKind {
    Legend,
    Paragraph,
    Blurbs,
}

impl<'a> FigText<'a> {
    pub fn kind(&self) -> FigTextKind {
        match self {
            FigText::Legend(_) => FigTextKind::Legend,
            FigText::Paragraph(_) => FigTextKind::Paragraph,
            FigText::Blurbs(_) => FigTextKind::Blurbs,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FigText::Legend(text) | FigText::Paragraph(text) => *text,
            FigText::Blurbs(text) => text.as_str(),
        }
    }

    pub fn is_legend(&self) -> bool {
        matches!(self, FigText::Legend(_))
    }
}

impl fmt::Display for FigText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_fig_paragraph(paragraph: &str) -> bool {
    is_legend(paragraph) || has_reference(paragraph)
}

/// Legend paragraphs of `text`, in order.
pub fn legends<'a>(text: &'a str, boundary: &'a str) -> impl Iterator<Item = &'a str> + Clone + 'a {
    paragraphs(text, boundary).filter(|p| is_legend(p))
}

/// Legends and paragraphs that mention a figure or table, whole.
pub fn legends_and_fig_paragraphs<'a>(
    text: &'a str,
    boundary: &'a str,
) -> impl Iterator<Item = FigText<'a>> + Clone + 'a {
    paragraphs(text, boundary).filter_map(|p| {
        if is_legend(p) {
            Some(FigText::Legend(p))
        } else if has_reference(p) {
            Some(FigText::Paragraph(p))
        } else {
            None
        }
    })
}

/// Legends whole, other paragraphs reduced to their figure/table blurbs.
/// Paragraphs without any reference are left out.
pub fn legends_and_fig_words<'a>(
    text: &'a str,
    boundary: &'a str,
    width: WindowWidth,
) -> impl Iterator<Item = FigText<'a>> + Clone + 'a {
    paragraphs(text, boundary).filter_map(move |p| {
        if is_legend(p) {
            return Some(FigText::Legend(p));
        }
        let blurbs = figure_blurbs(p, width);
        if blurbs.is_empty() {
            trace!(len = p.len(), "paragraph has no figure references");
            None
        } else {
            Some(FigText::Blurbs(blurbs.join(" ")))
        }
    })
}

/// Runs the fig text builders with one set of options.
#[derive(Debug, Clone, Default)]
pub struct FigTextExtractor {
    options: ExtractOptions,
}

impl FigTextExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn paragraphs<'a>(&'a self, text: &'a str) -> Paragraphs<'a> {
        paragraphs(text, &self.options.paragraph_boundary)
    }

    pub fn extract<'a>(
        &'a self,
        text: &'a str,
        mode: FigTextMode,
    ) -> Box<dyn Iterator<Item = FigText<'a>> + 'a> {
        let boundary = self.options.paragraph_boundary.as_str();
        match mode {
            FigTextMode::Legends => Box::new(legends(text, boundary).map(FigText::Legend)),
            FigTextMode::Paragraphs => Box::new(legends_and_fig_paragraphs(text, boundary)),
            FigTextMode::Words => Box::new(legends_and_fig_words(
                text,
                boundary,
                self.options.num_words,
            )),
        }
    }

    pub fn extract_all<'a>(&'a self, text: &'a str, mode: FigTextMode) -> Vec<FigText<'a>> {
        let items: Vec<FigText<'a>> = self.extract(text, mode).collect();
        debug!(
            %mode,
            paragraphs = self.paragraphs(text).count(),
            legends = items.iter().filter(|t| t.is_legend()).count(),
            emitted = items.len(),
            "extracted fig text"
        );
        items
    }
}
