use async_trait::async_trait;

use super::model::{SummaryModel, SummaryParams};
use crate::errors::ModelError;

/// Offline extractive model: keeps leading sentences.
///
/// Lengths are counted in words. Sentences are taken in order until at least
/// `min_length` words are collected; the output never exceeds `max_length`
/// words, truncating the last sentence at a word boundary when needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadSummarizer;

impl LeadSummarizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Deterministic for identical input.
    ///
    /// # Errors
    ///
    /// Returns an error for inverted bounds or text without words.
    pub fn summarize_text(&self, text: &str, params: &SummaryParams) -> Result<String, ModelError> {
        if params.min_length > params.max_length {
            return Err(ModelError::ApiError {
                status: 400,
                message: format!(
                    "min_length {} exceeds max_length {}",
                    params.min_length, params.max_length
                ),
            });
        }

        let mut words: Vec<&str> = Vec::new();
        for sentence in split_sentences(text) {
            if words.len() >= params.min_length.max(1) {
                break;
            }
            let room = params.max_length - words.len();
            let sentence_words: Vec<&str> = sentence.split_whitespace().collect();
            if sentence_words.len() <= room {
                words.extend(sentence_words);
            } else {
                words.extend(&sentence_words[..room]);
                break;
            }
        }

        if words.is_empty() {
            return Err(ModelError::EmptyOutput);
        }
        Ok(words.join(" "))
    }
}

/// Splits on `.`, `!` or `?` followed by whitespace or the end of text.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if at_boundary {
            let end = idx + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

#[async_trait]
impl SummaryModel for LeadSummarizer {
    fn name(&self) -> &str {
        "lead"
    }

    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, ModelError> {
        self.summarize_text(text, params)
    }
}
