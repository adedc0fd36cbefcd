//! Downloadable summary documents.

pub mod pdf;

use tracing::info;

use crate::core::models::ExportArtifact;
use crate::errors::ExportError;
use crate::highlight::strip_markers;
use pdf::PageLayout;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportRenderer {
    layout: PageLayout,
}

impl ExportRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(layout: PageLayout) -> Self {
        Self { layout }
    }

    /// Renders the summary as a fresh PDF artifact. Highlight markers are
    /// dropped; the document carries plain text only.
    ///
    /// # Errors
    ///
    /// Returns an error only if PDF serialization fails.
    pub fn render(&self, summary_text: &str) -> Result<ExportArtifact, ExportError> {
        let plain = strip_markers(summary_text);
        let bytes = pdf::render_pdf(&plain, &self.layout)?;
        info!(
            chars = plain.chars().count(),
            bytes = bytes.len(),
            "Rendered summary export"
        );
        Ok(ExportArtifact::pdf(bytes))
    }
}
