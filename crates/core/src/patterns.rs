//! Figure/table keyword patterns.
//!
//! Two patterns are compiled once per process:
//! - the reference pattern, searched anywhere in a paragraph;
//! - the legend-start pattern, anchored at the start of a paragraph.
//!
//! pdftotext sometimes inserts spaces between the letters of bold text, so the
//! legend-start words accept whitespace between any two letters ("F i g u re 2").

use once_cell::sync::Lazy;
use regex::Regex;

static REFERENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:fig(?:ure)?|table)s?\b").expect("reference pattern compiles")
});

static LEGEND_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&legend_start_pattern()).expect("legend start pattern compiles")
});

/// A figure/table keyword found in a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceMatch<'a> {
    /// Byte offset of the keyword in the paragraph.
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// Regex source matching `word` with arbitrary whitespace between its characters.
pub fn spaced_out(word: &str) -> String {
    let mut buf = [0u8; 4];
    word.chars()
        .map(|c| regex::escape(c.encode_utf8(&mut buf)))
        .collect::<Vec<_>>()
        .join(r"\s*")
}

fn legend_start_pattern() -> String {
    // "supp" followed by anything word-like: Supplemental, Supp lem ental Data, ...
    let supp = format!(r"{}(?:\w|[ ])*", spaced_out("supp"));
    let qualifier = [supp, spaced_out("online"), spaced_out("extendeddata")].join("|");
    let base = [spaced_out("figure"), spaced_out("fig"), spaced_out("table")].join("|");
    format!(r"(?i)^\b(?:(?:{qualifier})\s+)?(?:{base})\b")
}

/// Every figure/table keyword in `paragraph`, left to right, non-overlapping.
pub fn reference_matches(paragraph: &str) -> impl Iterator<Item = ReferenceMatch<'_>> + '_ {
    REFERENCE_REGEX.find_iter(paragraph).map(|m| ReferenceMatch {
        start: m.start(),
        end: m.end(),
        text: m.as_str(),
    })
}

pub fn has_reference(paragraph: &str) -> bool {
    REFERENCE_REGEX.is_match(paragraph)
}

/// True when `paragraph` opens with a figure or table caption phrase.
pub fn is_legend(paragraph: &str) -> bool {
    LEGEND_START_REGEX.is_match(paragraph)
}
