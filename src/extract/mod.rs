//! Plain text from pasted input and uploaded documents.

pub mod docx;

use tracing::{debug, info, warn};

use crate::core::models::{FormatTag, SourceInput, UploadedFile};
use crate::errors::ExtractError;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the plain text of the request's authoritative source.
    ///
    /// Inline text is returned as-is. Unsupported file formats yield an empty
    /// string rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a supported file cannot be decoded.
    pub fn extract(&self, source: &SourceInput) -> Result<String, ExtractError> {
        match source {
            SourceInput::Inline(text) => Ok(text.clone()),
            SourceInput::File(file) => self.extract_file(file),
        }
    }

    /// # Errors
    ///
    /// Returns an error for invalid UTF-8 in a `.txt` upload or a corrupt
    /// `.docx` container.
    pub fn extract_file(&self, file: &UploadedFile) -> Result<String, ExtractError> {
        let format = file.format();
        info!(
            filename = %file.filename,
            content_type = %file.content_type(),
            size = file.bytes.len(),
            "Extracting text from upload"
        );

        let text = match format {
            FormatTag::PlainText => String::from_utf8(file.bytes.clone())?,
            FormatTag::Docx => {
                let paragraphs = docx::read_paragraphs(&file.bytes)?;
                debug!("Read {} paragraphs from document", paragraphs.len());
                paragraphs.join("\n")
            }
            FormatTag::Unsupported(ref extension) => {
                warn!(extension = %extension, "Unsupported upload format, no text extracted");
                String::new()
            }
        };

        Ok(text)
    }
}
