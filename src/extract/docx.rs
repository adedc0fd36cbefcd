//! Paragraph text from Office Open XML word-processing documents.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

use crate::errors::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the body paragraphs of a `.docx` container, in document order.
pub fn read_paragraphs(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    parse_document_xml(&xml)
}

/// Collects the text of top-level body paragraphs from `word/document.xml`.
///
/// Paragraphs nested in tables or text boxes are not body paragraphs and are
/// skipped. Run-level tabs and breaks are kept as `\t` and `\n`.
pub fn parse_document_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut paragraph_depth = 0usize;
    let mut table_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" => {
                    paragraph_depth += 1;
                    if paragraph_depth == 1 && table_depth == 0 {
                        current = Some(String::new());
                    }
                }
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if paragraph_depth == 0 && table_depth == 0 => paragraphs.push(String::new()),
                b"tab" if run_depth > 0 && paragraph_depth == 1 => {
                    if let Some(text) = current.as_mut() {
                        text.push('\t');
                    }
                }
                b"br" | b"cr" if run_depth > 0 && paragraph_depth == 1 => {
                    if let Some(text) = current.as_mut() {
                        text.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(e) => {
                if in_text
                    && paragraph_depth == 1
                    && let Some(text) = current.as_mut()
                {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => {
                    if paragraph_depth == 1
                        && let Some(text) = current.take()
                    {
                        paragraphs.push(text);
                    }
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                }
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
