use thiserror::Error;

/// Failures while turning uploaded bytes into plain text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to decode text as UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to open document container: {0}")]
    Container(String),

    #[error("Failed to parse document XML: {0}")]
    Xml(String),

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(error: zip::result::ZipError) -> Self {
        ExtractError::Container(error.to_string())
    }
}

impl From<quick_xml::Error> for ExtractError {
    fn from(error: quick_xml::Error) -> Self {
        ExtractError::Xml(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Text is too short for language detection ({chars} characters, need {min})")]
    TooShort { chars: usize, min: usize },

    #[error("Could not detect the language of the text")]
    Undetectable,
}

/// Failures raised by a summarization backend.
///
/// These never leave the pipeline as errors: the summarizer turns them into a
/// failed `SummaryResult`.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Model request timed out")]
    Timeout,

    #[error("Model endpoint returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Model is loading: {0}")]
    Loading(String),

    #[error("Unexpected model response: {0}")]
    MalformedResponse(String),

    #[error("Model returned no summary")]
    EmptyOutput,
}

impl ModelError {
    /// Whether a retry has a reasonable chance of succeeding.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            ModelError::HttpError(_) | ModelError::Timeout | ModelError::Loading(_) => true,
            ModelError::ApiError { status, .. } => *status == 429 || *status >= 500,
            ModelError::MalformedResponse(_) | ModelError::EmptyOutput => false,
        }
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ModelError::Timeout
        } else if let Some(status) = error.status() {
            ModelError::ApiError {
                status: status.as_u16(),
                message: error.to_string(),
            }
        } else {
            ModelError::HttpError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(error: serde_json::Error) -> Self {
        ModelError::MalformedResponse(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to render PDF: {0}")]
    Render(String),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for ExportError {
    fn from(error: lopdf::Error) -> Self {
        ExportError::Render(error.to_string())
    }
}

/// Faults that have no in-band fallback and propagate to the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to extract text: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Failed to detect language: {0}")]
    Language(#[from] LanguageError),

    #[error("Failed to export summary: {0}")]
    Export(#[from] ExportError),
}
