use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use super::model::{SummaryModel, SummaryParams};
use crate::core::models::SummaryResult;

/// Runs the shared model with fixed bounds and turns every failure into a
/// `SummaryResult` value.
#[derive(Clone)]
pub struct Summarizer {
    model: Arc<dyn SummaryModel>,
    params: SummaryParams,
}

impl Summarizer {
    #[must_use]
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self {
            model,
            params: SummaryParams::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SummaryParams {
        &self.params
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub async fn summarize(&self, text: &str) -> SummaryResult {
        if text.trim().is_empty() {
            return SummaryResult::failure("No text to summarize");
        }

        let started = Instant::now();
        match self.model.summarize(text, &self.params).await {
            Ok(summary) => {
                info!(
                    model = self.model.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    chars = summary.chars().count(),
                    "Summary generated"
                );
                SummaryResult::success(summary)
            }
            Err(e) => {
                error!(model = self.model.name(), "Summarization failed: {}", e);
                SummaryResult::failure(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("model", &self.model.name())
            .field("params", &self.params)
            .finish()
    }
}
