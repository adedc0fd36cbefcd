/// docsum - condenses uploaded documents into short summaries.
///
/// This crate implements the request pipeline behind a document summarizer:
/// 1. Text is extracted from pasted input or an uploaded `.txt` / `.docx` file
/// 2. A language gate rejects non-English requests
/// 3. A shared summarization model produces a bounded, deterministic summary
/// 4. User keywords are highlighted in the result
/// 5. The (possibly edited) summary can be exported as a PDF
///
/// # Architecture
///
/// The system uses:
/// - reqwest + tokio-retry for the hosted inference endpoint
/// - zip + quick-xml for `.docx` paragraphs
/// - whatlang for language detection
/// - regex for literal keyword matching
/// - lopdf for PDF export
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use docsum::ai::LeadSummarizer;
/// use docsum::core::models::{SummaryRequest, TargetLanguage};
/// use docsum::pipeline::Pipeline;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     docsum::setup_logging();
///
///     let pipeline = Pipeline::with_model(Arc::new(LeadSummarizer::new()));
///     let payload = pipeline
///         .process(SummaryRequest {
///             text: "Rust is a systems programming language focused on safety.".into(),
///             file: None,
///             keywords: "rust, safety".into(),
///             target_language: TargetLanguage::default(),
///         })
///         .await?;
///     println!("{}", payload.highlighted_summary_html);
///
///     let artifact = pipeline.export(&payload.summary_text)?;
///     println!("{} ({} bytes)", artifact.filename, artifact.bytes.len());
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod export;
pub mod extract;
pub mod highlight;
pub mod language;
pub mod pipeline;
pub mod utils;

pub use errors::PipelineError;
pub use pipeline::Pipeline;

/// Configure structured JSON logging.
///
/// Verbosity follows `RUST_LOG` and defaults to `info`. Call once at the start
/// of the process.
///
/// # Example
///
/// ```
/// docsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
