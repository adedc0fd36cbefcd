use async_trait::async_trait;
use serde::Serialize;

use crate::errors::ModelError;

pub const MIN_SUMMARY_LENGTH: usize = 30;
pub const MAX_SUMMARY_LENGTH: usize = 130;

/// Length bounds and decoding mode passed to every model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    pub min_length: usize,
    pub max_length: usize,
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            min_length: MIN_SUMMARY_LENGTH,
            max_length: MAX_SUMMARY_LENGTH,
            do_sample: false,
        }
    }
}

/// A text-to-text compression capability.
///
/// Implementations are shared read-only across concurrent requests and must
/// not keep per-request state.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the best candidate summary for `text`.
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, ModelError>;
}
