//! Request processing: extraction → language gate → summarization →
//! highlighting, plus on-demand export.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::{Summarizer, SummaryModel};
use crate::core::config::AppConfig;
use crate::core::models::{
    DisplayPayload, EMPTY_INPUT_MESSAGE, ExportArtifact, KeywordSet, LANGUAGE_REJECTED_MESSAGE,
    SourceInput, SummaryRequest, SummaryStatus, TargetLanguage,
};
use crate::errors::PipelineError;
use crate::export::ExportRenderer;
use crate::extract::TextExtractor;
use crate::highlight::KeywordHighlighter;
use crate::language::LanguageGate;

/// The summarization pipeline. Cheap to clone; the model handle is shared.
#[derive(Debug, Clone)]
pub struct Pipeline {
    extractor: TextExtractor,
    gate: LanguageGate,
    summarizer: Summarizer,
    highlighter: KeywordHighlighter,
    exporter: ExportRenderer,
}

impl Pipeline {
    #[must_use]
    pub fn new(model: Arc<dyn SummaryModel>, config: &AppConfig) -> Self {
        Self {
            gate: LanguageGate::new(config.min_detect_chars),
            ..Self::with_model(model)
        }
    }

    /// Pipeline with default gate and export settings.
    #[must_use]
    pub fn with_model(model: Arc<dyn SummaryModel>) -> Self {
        Self {
            extractor: TextExtractor::new(),
            gate: LanguageGate::default(),
            summarizer: Summarizer::new(model),
            highlighter: KeywordHighlighter::new(),
            exporter: ExportRenderer::new(),
        }
    }

    /// Runs one request start to finish.
    ///
    /// Empty input, language rejection and model failures come back as a
    /// payload with the matching status.
    ///
    /// # Errors
    ///
    /// Returns an error if an upload cannot be decoded or the language of the
    /// text cannot be detected.
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(request_id = %Uuid::new_v4(), target = %request.target_language)
    )]
    pub async fn process(&self, request: SummaryRequest) -> Result<DisplayPayload, PipelineError> {
        let SummaryRequest {
            text,
            file,
            keywords,
            target_language,
        } = request;

        let extracted = match SourceInput::select(text, file) {
            SourceInput::Inline(text) => text,
            SourceInput::File(file) => self.extractor.extract_file(&file)?,
        };

        let original_text = extracted.trim();
        if original_text.is_empty() {
            info!("Request has no usable text");
            return Ok(notice(
                SummaryStatus::EmptyInput,
                EMPTY_INPUT_MESSAGE,
                String::new(),
                target_language,
            ));
        }

        #[cfg(feature = "debug-logs")]
        tracing::debug!("Request text:\n{}", original_text);

        let decision = self.gate.decide(original_text, &target_language)?;
        if !decision.allowed {
            warn!(
                detected = decision.detected_code(),
                "Rejecting request for unsupported language"
            );
            return Ok(notice(
                SummaryStatus::LanguageRejected,
                LANGUAGE_REJECTED_MESSAGE,
                original_text.to_string(),
                target_language,
            ));
        }

        let result = self.summarizer.summarize(original_text).await;
        if !result.succeeded {
            let cause = result.error_message.unwrap_or_default();
            return Ok(notice(
                SummaryStatus::SummarizationFailed,
                &format!("Error during summarization: {cause}"),
                original_text.to_string(),
                target_language,
            ));
        }

        let keywords = KeywordSet::parse(&keywords);
        let highlighted = self.highlighter.highlight(&result.text, &keywords);
        info!(
            keywords = keywords.len(),
            matches = highlighted.spans().len(),
            "Request summarized"
        );

        Ok(DisplayPayload {
            status: SummaryStatus::Summarized,
            highlighted_summary_html: highlighted.to_html(),
            summary_text: result.text,
            original_text: original_text.to_string(),
            target_language,
        })
    }

    /// Materializes a downloadable document from (possibly edited) summary text.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn export(&self, summary_text: &str) -> Result<ExportArtifact, PipelineError> {
        Ok(self.exporter.render(summary_text)?)
    }

    #[must_use]
    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }
}

fn notice(
    status: SummaryStatus,
    message: &str,
    original_text: String,
    target_language: TargetLanguage,
) -> DisplayPayload {
    DisplayPayload {
        status,
        summary_text: message.to_string(),
        highlighted_summary_html: String::new(),
        original_text,
        target_language,
    }
}

