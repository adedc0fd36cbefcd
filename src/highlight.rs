//! Keyword emphasis for generated summaries.
//!
//! Keywords are matched as literal text, case-insensitively, on whole words
//! only: a match must be preceded and followed by the text boundary or a
//! non-alphanumeric character. Regions already wrapped in `<mark>` are kept
//! and never wrapped again, so re-highlighting is a no-op.

use regex::{Regex, RegexBuilder};
use std::fmt;
use std::ops::Range;
use tracing::warn;

use crate::core::models::KeywordSet;
use crate::utils::html::escape_html;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Summary text plus the byte ranges to emphasize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedSummary {
    text: String,
    spans: Vec<Range<usize>>,
}

impl HighlightedSummary {
    /// The summary without any markers.
    #[must_use]
    pub fn plain(&self) -> &str {
        &self.text
    }

    /// Sorted, non-overlapping byte ranges into [`Self::plain`].
    #[must_use]
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    #[must_use]
    pub fn matched_terms(&self) -> Vec<&str> {
        self.spans.iter().map(|s| &self.text[s.clone()]).collect()
    }

    /// The summary with each span wrapped in `<mark>`/`</mark>`.
    #[must_use]
    pub fn marked(&self) -> String {
        self.render(|segment| segment.to_string())
    }

    /// HTML for display: text is escaped, spans become `<mark>` elements.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.render(escape_html)
    }

    fn render<F>(&self, encode: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut out = String::with_capacity(self.text.len() + self.spans.len() * 13);
        let mut cursor = 0;
        for span in &self.spans {
            out.push_str(&encode(&self.text[cursor..span.start]));
            out.push_str(MARK_OPEN);
            out.push_str(&encode(&self.text[span.clone()]));
            out.push_str(MARK_CLOSE);
            cursor = span.end;
        }
        out.push_str(&encode(&self.text[cursor..]));
        out
    }
}

impl fmt::Display for HighlightedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marked())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordHighlighter;

impl KeywordHighlighter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Wraps every whole-word occurrence of each keyword.
    ///
    /// Keywords apply in order; a match overlapping an earlier one (or an
    /// existing marked region) is skipped.
    #[must_use]
    pub fn highlight(&self, summary: &str, keywords: &KeywordSet) -> HighlightedSummary {
        let (text, mut spans) = split_marked(summary);

        for keyword in keywords.iter() {
            let Some(pattern) = literal_pattern(keyword) else {
                continue;
            };

            let mut pos = 0;
            while pos <= text.len() {
                let Some(m) = pattern.find_at(&text, pos) else {
                    break;
                };
                let range = m.range();
                if range.is_empty() {
                    break;
                }

                if is_whole_word(&text, &range) && !spans.iter().any(|s| overlaps(s, &range)) {
                    pos = range.end;
                    spans.push(range);
                } else {
                    pos = next_char_boundary(&text, range.start);
                }
            }
        }

        spans.sort_by_key(|s| s.start);
        HighlightedSummary { text, spans }
    }
}

/// Removes highlight markers, keeping the wrapped text.
#[must_use]
pub fn strip_markers(text: &str) -> String {
    split_marked(text).0
}

/// Separates existing `<mark>…</mark>` regions from the visible text.
/// An opening marker without a closing one is kept as literal text.
fn split_marked(input: &str) -> (String, Vec<Range<usize>>) {
    let mut text = String::with_capacity(input.len());
    let mut spans = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find(MARK_OPEN) {
        let inner = &rest[open + MARK_OPEN.len()..];
        let Some(close) = inner.find(MARK_CLOSE) else {
            break;
        };
        text.push_str(&rest[..open]);
        let start = text.len();
        text.push_str(&inner[..close]);
        spans.push(start..text.len());
        rest = &inner[close + MARK_CLOSE.len()..];
    }
    text.push_str(rest);

    (text, spans)
}

fn literal_pattern(keyword: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping keyword that cannot be matched: {}", e);
            None
        }
    }
}

fn is_whole_word(text: &str, range: &Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    before.is_none_or(|c| !c.is_alphanumeric()) && after.is_none_or(|c| !c.is_alphanumeric())
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn next_char_boundary(text: &str, idx: usize) -> usize {
    idx + text[idx..].chars().next().map_or(1, char::len_utf8)
}
