//! Core library: paragraph segmentation, legend detection, and figure/table
//! blurbs for text extracted from scientific papers.

pub mod blurbs;
pub mod config;
pub mod error;
pub mod figtext;
pub mod paragraphs;
pub mod patterns;

pub use blurbs::{figure_blurbs, WindowWidth};
pub use crate::config::{AppConfig, ExtractOptions};
pub use error::FigTextError;
pub use figtext::{
    is_fig_paragraph, legends, legends_and_fig_paragraphs, legends_and_fig_words, FigText,
    FigTextExtractor, FigTextKind, FigTextMode,
};
pub use paragraphs::{paragraphs, Paragraphs, DEFAULT_PARAGRAPH_BOUNDARY};
pub use patterns::{has_reference, is_legend, reference_matches, ReferenceMatch};
