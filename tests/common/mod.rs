#![allow(dead_code)]

use async_trait::async_trait;
use docsum::ai::{SummaryModel, SummaryParams};
use docsum::errors::ModelError;
use docsum::utils::html::escape_html;
use std::io::{Cursor, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds a minimal `.docx` container holding the given body paragraphs.
pub fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<w:p/>".to_string()
            } else {
                format!(
                    r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                    escape_html(p)
                )
            }
        })
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    );

    build_zip(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/document.xml", document.as_str()),
    ])
}

pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, contents) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Model double that records every call.
pub struct FakeModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, SummaryParams)>>,
}

impl FakeModel {
    pub fn replying(summary: &str) -> Self {
        Self {
            reply: Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<(String, SummaryParams)> {
        self.seen.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SummaryModel for FakeModel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((text.to_string(), *params));
        match &self.reply {
            Ok(summary) => Ok(summary.clone()),
            Err(message) => Err(ModelError::ApiError {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

pub const ENGLISH_PROSE: &str = "The quick brown fox jumps over the lazy dog. It was a sunny afternoon in the countryside.";

pub const SPANISH_PROSE: &str = "El rápido zorro marrón salta sobre el perro perezoso. Era una tarde soleada en el campo y todos estaban contentos.";
