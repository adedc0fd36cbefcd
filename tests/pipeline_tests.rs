mod common;

use common::{ENGLISH_PROSE, FakeModel, SPANISH_PROSE, build_docx};
use docsum::ai::LeadSummarizer;
use docsum::core::config::AppConfig;
use docsum::core::models::{
    EMPTY_INPUT_MESSAGE, LANGUAGE_REJECTED_MESSAGE, SummaryRequest, SummaryStatus, TargetLanguage,
    UploadedFile,
};
use docsum::errors::PipelineError;
use docsum::pipeline::Pipeline;
use std::sync::Arc;

fn request(text: &str) -> SummaryRequest {
    SummaryRequest {
        text: text.to_string(),
        ..SummaryRequest::default()
    }
}

#[tokio::test]
async fn test_summarizes_and_highlights_english_text() {
    let model = Arc::new(FakeModel::replying("A quick fox jumps over a lazy dog."));
    let pipeline = Pipeline::with_model(model.clone());

    let payload = pipeline
        .process(SummaryRequest {
            keywords: "fox, Dog ,,".to_string(),
            ..request(ENGLISH_PROSE)
        })
        .await
        .unwrap();

    assert_eq!(payload.status, SummaryStatus::Summarized);
    assert_eq!(payload.summary_text, "A quick fox jumps over a lazy dog.");
    assert_eq!(
        payload.highlighted_summary_html,
        "A quick <mark>fox</mark> jumps over a lazy <mark>dog</mark>."
    );
    assert_eq!(payload.original_text, ENGLISH_PROSE);
    assert_eq!(model.calls(), 1);

    let (text, params) = model.last_call().unwrap();
    assert_eq!(text, ENGLISH_PROSE);
    assert_eq!((params.min_length, params.max_length), (30, 130));
    assert!(!params.do_sample);
}

#[tokio::test]
async fn test_blank_input_never_reaches_the_model() {
    let model = Arc::new(FakeModel::replying("unused"));
    let pipeline = Pipeline::with_model(model.clone());

    for text in ["", "   ", "\n\t \n"] {
        let payload = pipeline.process(request(text)).await.unwrap();
        assert_eq!(payload.status, SummaryStatus::EmptyInput);
        assert_eq!(payload.summary_text, EMPTY_INPUT_MESSAGE);
        assert!(payload.highlighted_summary_html.is_empty());
    }
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_foreign_text_for_foreign_target_is_rejected() {
    let model = Arc::new(FakeModel::replying("unused"));
    let pipeline = Pipeline::with_model(model.clone());

    let payload = pipeline
        .process(SummaryRequest {
            target_language: TargetLanguage::new("Spanish"),
            ..request(SPANISH_PROSE)
        })
        .await
        .unwrap();

    assert_eq!(payload.status, SummaryStatus::LanguageRejected);
    assert_eq!(payload.summary_text, LANGUAGE_REJECTED_MESSAGE);
    assert_eq!(payload.original_text, SPANISH_PROSE);
    assert_eq!(payload.target_language.as_str(), "Spanish");
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_foreign_text_for_default_target_is_summarized() {
    let model = Arc::new(FakeModel::replying("Un zorro salta."));
    let pipeline = Pipeline::with_model(model.clone());

    let payload = pipeline.process(request(SPANISH_PROSE)).await.unwrap();
    assert_eq!(payload.status, SummaryStatus::Summarized);
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_model_failure_becomes_a_display_message() {
    let model = Arc::new(FakeModel::failing("model overloaded"));
    let pipeline = Pipeline::with_model(model.clone());

    let payload = pipeline.process(request(ENGLISH_PROSE)).await.unwrap();
    assert_eq!(payload.status, SummaryStatus::SummarizationFailed);
    assert_eq!(
        payload.summary_text,
        "Error during summarization: Model endpoint returned 500: model overloaded"
    );
    assert!(payload.highlighted_summary_html.is_empty());
}

#[tokio::test]
async fn test_uploaded_file_supersedes_pasted_text() {
    let model = Arc::new(FakeModel::replying("A short summary."));
    let pipeline = Pipeline::with_model(model.clone());
    let docx = build_docx(&[
        "The quick brown fox jumps over the lazy dog.",
        "It was a sunny afternoon in the countryside.",
    ]);

    let payload = pipeline
        .process(SummaryRequest {
            file: Some(UploadedFile::new("story.docx", docx)),
            ..request("This pasted text should be ignored entirely by the pipeline.")
        })
        .await
        .unwrap();

    assert_eq!(payload.status, SummaryStatus::Summarized);
    let (text, _) = model.last_call().unwrap();
    assert_eq!(
        text,
        "The quick brown fox jumps over the lazy dog.\nIt was a sunny afternoon in the countryside."
    );
}

#[tokio::test]
async fn test_unsupported_upload_is_treated_as_empty() {
    let model = Arc::new(FakeModel::replying("unused"));
    let pipeline = Pipeline::with_model(model.clone());

    let payload = pipeline
        .process(SummaryRequest {
            file: Some(UploadedFile::new("slides.pdf", b"%PDF-1.7".to_vec())),
            ..request(ENGLISH_PROSE)
        })
        .await
        .unwrap();

    assert_eq!(payload.status, SummaryStatus::EmptyInput);
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_undecodable_upload_is_an_error() {
    let pipeline = Pipeline::with_model(Arc::new(FakeModel::replying("unused")));

    let err = pipeline
        .process(SummaryRequest {
            file: Some(UploadedFile::new("notes.txt", vec![0xff, 0xfe, 0xfd])),
            ..SummaryRequest::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Extraction(_)));
}

#[tokio::test]
async fn test_too_short_text_is_an_error() {
    let pipeline = Pipeline::with_model(Arc::new(FakeModel::replying("unused")));
    let err = pipeline.process(request("Hi.")).await.unwrap_err();
    assert!(matches!(err, PipelineError::Language(_)));
}

#[tokio::test]
async fn test_lead_backend_runs_end_to_end() {
    let config = AppConfig::default();
    let pipeline = Pipeline::new(Arc::new(LeadSummarizer::new()), &config);
    let text = "Rust is a systems programming language focused on safety. \
                It prevents data races at compile time. \
                The borrow checker enforces ownership rules for every reference. \
                Many teams adopt it for network services and command line tools. \
                Its package manager makes sharing libraries straightforward.";

    let payload = pipeline
        .process(SummaryRequest {
            keywords: "rust".to_string(),
            ..request(text)
        })
        .await
        .unwrap();

    assert_eq!(payload.status, SummaryStatus::Summarized);
    assert!(payload.summary_text.starts_with("Rust is a systems programming language"));
    assert!(payload.highlighted_summary_html.starts_with("<mark>Rust</mark> is"));
    assert_eq!(pipeline.summarizer().model_name(), "lead");
}

#[test]
fn test_export_uses_fixed_artifact_metadata() {
    let pipeline = Pipeline::with_model(Arc::new(FakeModel::replying("unused")));
    let artifact = pipeline
        .export("A <mark>fox</mark> summary.")
        .unwrap();
    assert_eq!(artifact.filename, "summary.pdf");
    assert_eq!(artifact.content_type, "application/pdf");
    assert!(artifact.bytes.starts_with(b"%PDF"));
}
