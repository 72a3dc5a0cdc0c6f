//! Paragraph segmentation of extracted text.
//!
//! Text is split on every literal occurrence of a boundary string. Pieces are
//! trimmed and pieces that trim to nothing are dropped.

use std::str::Split;

/// Paragraph boundary used by pdftotext-style extraction.
pub const DEFAULT_PARAGRAPH_BOUNDARY: &str = "\n\n";

/// Lazy iterator over the paragraphs of a text. A clone replays the remaining
/// paragraphs; call [`paragraphs`] again to start from the beginning.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    pieces: Pieces<'a>,
}

#[derive(Debug, Clone)]
enum Pieces<'a> {
    Split(Split<'a, &'a str>),
    // An empty boundary never splits.
    Whole(Option<&'a str>),
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let piece = match &mut self.pieces {
                Pieces::Split(split) => split.next()?,
                Pieces::Whole(text) => text.take()?,
            };
            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
    }
}

/// Iterate the trimmed, non-empty paragraphs of `text` separated by `boundary`.
pub fn paragraphs<'a>(text: &'a str, boundary: &'a str) -> Paragraphs<'a> {
    let pieces = if boundary.is_empty() {
        Pieces::Whole(Some(text))
    } else {
        Pieces::Split(text.split(boundary))
    };
    Paragraphs { pieces }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str, boundary: &str) -> Vec<String> {
        paragraphs(text, boundary).map(str::to_string).collect()
    }

    #[test]
    fn trailing_boundary_is_ignored() {
        let text = ["Para one. ", "Para two."].join("\n\n") + "\n\n";
        assert_eq!(collect(&text, "\n\n"), vec!["Para one.", "Para two."]);
    }

    #[test]
    fn no_trailing_boundary() {
        let text = ["Para one. ", "Para two."].join("\n\n");
        assert_eq!(collect(&text, "\n\n"), vec!["Para one.", "Para two."]);
    }

    #[test]
    fn blank_pieces_are_skipped() {
        let text = ["", " ", "Para one.", "\n", "Para two.", ""].join("\n\n");
        assert_eq!(collect(&text, "\n\n"), vec!["Para one.", "Para two."]);
    }

    #[test]
    fn single_paragraph_without_boundary() {
        assert_eq!(collect("Para one.", "\n\n"), vec!["Para one."]);
    }

    #[test]
    fn empty_and_boundary_only_text() {
        assert!(collect("", "\n\n").is_empty());
        assert!(collect("\n\n", "\n\n").is_empty());
        assert!(collect("\n\n\n\n\n\n", "\n\n").is_empty());
    }

    #[test]
    fn alternate_boundary() {
        let boundary = r"\par;";
        let text = ["Para one.", "", "Para two.", ""].join(boundary) + boundary;
        assert_eq!(collect(&text, boundary), vec!["Para one.", "Para two."]);
    }

    #[test]
    fn single_newlines_stay_inside_paragraph() {
        let text = "F i g u re 2 blah.\nSecond line.\n\n\nnext";
        assert_eq!(
            collect(text, "\n\n"),
            vec!["F i g u re 2 blah.\nSecond line.", "next"]
        );
    }

    #[test]
    fn empty_boundary_yields_whole_text() {
        assert_eq!(collect("  a\n\nb  ", ""), vec!["a\n\nb"]);
        assert!(collect("   ", "").is_empty());
    }

    #[test]
    fn iterator_is_restartable_by_clone() {
        let text = "one\n\ntwo\n\nthree";
        let mut iter = paragraphs(text, "\n\n");
        assert_eq!(iter.next(), Some("one"));
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, vec!["two", "three"]);
        assert_eq!(iter.collect::<Vec<_>>(), vec!["two", "three"]);
    }
}
