//! Summarization capability and its backends

pub mod client;
pub mod lead;
pub mod model;
pub mod summarizer;

use std::sync::Arc;

use crate::core::config::{AppConfig, Backend};
use crate::errors::ModelError;

// Re-export main types for convenience
pub use client::InferenceClient;
pub use lead::LeadSummarizer;
pub use model::{SummaryModel, SummaryParams};
pub use summarizer::Summarizer;

/// Builds the process-wide model handle selected by the configuration.
///
/// # Errors
///
/// Returns an error if the inference client cannot be constructed.
pub fn model_from_config(config: &AppConfig) -> Result<Arc<dyn SummaryModel>, ModelError> {
    match config.backend {
        Backend::Inference => Ok(Arc::new(InferenceClient::new(config)?)),
        Backend::Lead => Ok(Arc::new(LeadSummarizer::new())),
    }
}
