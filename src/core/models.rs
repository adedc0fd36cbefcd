use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::utils::mime::mime_for_filename;

pub const DEFAULT_TARGET_LANGUAGE: &str = "English";
pub const EMPTY_INPUT_MESSAGE: &str = "Please provide valid input.";
pub const LANGUAGE_REJECTED_MESSAGE: &str = "Currently, only English summarization is supported.";
pub const EXPORT_FILENAME: &str = "summary.pdf";

/// Document format, derived from the uploaded filename's suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatTag {
    PlainText,
    Docx,
    Unsupported(String),
}

impl FormatTag {
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => FormatTag::PlainText,
            "docx" => FormatTag::Docx,
            _ => FormatTag::Unsupported(extension),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn format(&self) -> FormatTag {
        FormatTag::from_filename(&self.filename)
    }

    #[must_use]
    pub fn content_type(&self) -> String {
        mime_for_filename(&self.filename)
    }
}

/// The authoritative source of a request's text.
#[derive(Debug, Clone)]
pub enum SourceInput {
    Inline(String),
    File(UploadedFile),
}

impl SourceInput {
    /// A file with a non-empty name supersedes the inline text.
    #[must_use]
    pub fn select(text: String, file: Option<UploadedFile>) -> Self {
        match file {
            Some(file) if !file.filename.is_empty() => SourceInput::File(file),
            _ => SourceInput::Inline(text),
        }
    }
}

/// User-chosen target language label; anything but "English" is gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case(DEFAULT_TARGET_LANGUAGE)
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self(DEFAULT_TARGET_LANGUAGE.to_string())
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub text: String,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl SummaryResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            succeeded: false,
            error_message: Some(message.into()),
        }
    }
}

/// Ordered, trimmed, de-duplicated keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Parses a comma-separated keyword string. Empty entries and
    /// case-insensitive duplicates are dropped; first occurrence wins.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        input.split(',').collect()
    }

    fn push(&mut self, raw: &str) {
        let keyword = raw.trim();
        if keyword.is_empty() {
            return;
        }
        let lowered = keyword.to_lowercase();
        if self.0.iter().any(|k| k.to_lowercase() == lowered) {
            return;
        }
        self.0.push(keyword.to_string());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keywords = Self::default();
        for raw in iter {
            keywords.push(raw.as_ref());
        }
        keywords
    }
}

/// A single summarization request as handed over by the web layer.
#[derive(Debug, Clone, Default)]
pub struct SummaryRequest {
    pub text: String,
    pub file: Option<UploadedFile>,
    pub keywords: String,
    pub target_language: TargetLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Summarized,
    EmptyInput,
    LanguageRejected,
    SummarizationFailed,
}

/// Everything the web layer needs to render a response.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayPayload {
    pub status: SummaryStatus,
    pub summary_text: String,
    pub highlighted_summary_html: String,
    pub original_text: String,
    pub target_language: TargetLanguage,
}

/// A rendered, downloadable summary document.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    #[must_use]
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self {
            filename: EXPORT_FILENAME.to_string(),
            content_type: mime_for_filename(EXPORT_FILENAME),
            bytes,
        }
    }

    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
