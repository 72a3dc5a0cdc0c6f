//! Word windows ("blurbs") around figure/table references.
//!
//! Each reference keeps up to `num_words` words of context on each side.
//! When the trailing window of one reference would overlap the leading window
//! of the next, the two references share one blurb that spans all the words in
//! between. Otherwise the first blurb is closed and a new one starts.

use crate::error::FigTextError;
use crate::patterns::reference_matches;
use std::fmt;

/// Words of context kept on each side of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowWidth(usize);

impl WindowWidth {
    pub const DEFAULT: WindowWidth = WindowWidth(50);

    pub const fn new(num_words: usize) -> Self {
        WindowWidth(num_words)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for WindowWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for WindowWidth {
    fn from(num_words: usize) -> Self {
        WindowWidth(num_words)
    }
}

impl TryFrom<i64> for WindowWidth {
    type Error = FigTextError;

    fn try_from(num_words: i64) -> Result<Self, Self::Error> {
        usize::try_from(num_words)
            .map(WindowWidth)
            .map_err(|_| FigTextError::InvalidWindowWidth(num_words))
    }
}

impl fmt::Display for WindowWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Words of the blurb under construction, borrowed from the paragraph.
#[derive(Debug)]
struct OpenBlurb<'a> {
    words: Vec<&'a str>,
}

impl<'a> OpenBlurb<'a> {
    fn seeded(words: &[&'a str]) -> Self {
        OpenBlurb {
            words: words.to_vec(),
        }
    }

    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        self.words.extend(words);
    }

    fn close(self) -> String {
        self.words.join(" ")
    }
}

fn last_words<'s, 'a>(words: &'s [&'a str], n: usize) -> &'s [&'a str] {
    &words[words.len().saturating_sub(n)..]
}

/// True when the trailing window of one reference and the leading window of the
/// next overlap, given `intervening` words between the two keywords.
///
/// Integer form of `num_words > intervening / 2`.
fn windows_meet(num_words: usize, intervening: usize) -> bool {
    num_words.saturating_mul(2) > intervening
}

/// Blurbs around every reference in `paragraph`, in source order.
///
/// A paragraph without references yields no blurbs. A width of zero yields the
/// keyword words alone, one blurb per reference.
pub fn figure_blurbs(paragraph: &str, width: WindowWidth) -> Vec<String> {
    let num_words = width.get();
    // The keyword itself plus its trailing context.
    let keyword_and_trailing = num_words.saturating_add(1);
    let starts: Vec<usize> = reference_matches(paragraph).map(|m| m.start).collect();
    let (Some(&first), Some(&last)) = (starts.first(), starts.last()) else {
        return Vec::new();
    };

    let mut blurbs = Vec::new();

    let leading: Vec<&str> = paragraph[..first].split_whitespace().collect();
    let mut open = OpenBlurb::seeded(last_words(&leading, num_words));

    for pair in starts.windows(2) {
        // Words from this keyword up to, not including, the next keyword.
        let span: Vec<&str> = paragraph[pair[0]..pair[1]].split_whitespace().collect();
        let intervening = span.len().saturating_sub(1);

        if windows_meet(num_words, intervening) {
            open.extend(span.iter().copied());
        } else {
            open.extend(span.iter().copied().take(keyword_and_trailing));
            blurbs.push(open.close());
            open = OpenBlurb::seeded(last_words(&span, num_words));
        }
    }

    open.extend(paragraph[last..].split_whitespace().take(keyword_and_trailing));
    blurbs.push(open.close());

    blurbs
}
