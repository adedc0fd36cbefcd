//! Plain-text PDF rendering with a fixed monospaced layout.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

use crate::errors::ExportError;

const FONT_NAME: &str = "F1";

/// Page geometry in PDF points. The font is always Courier, whose glyphs are
/// 600/1000 em wide, so line capacity follows from the font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub width: i64,
    pub height: i64,
    pub margin: i64,
    pub font_size: i64,
    pub leading: i64,
}

impl Default for PageLayout {
    /// A4 portrait, 56pt margins, 12pt text on 16pt lines.
    fn default() -> Self {
        Self {
            width: 595,
            height: 842,
            margin: 56,
            font_size: 12,
            leading: 16,
        }
    }
}

impl PageLayout {
    #[must_use]
    pub fn chars_per_line(&self) -> usize {
        let usable = (self.width - 2 * self.margin).max(0) * 1000;
        let glyph = (self.font_size * 600).max(1);
        usize::try_from(usable / glyph).unwrap_or(0).max(1)
    }

    #[must_use]
    pub fn lines_per_page(&self) -> usize {
        let usable = (self.height - 2 * self.margin).max(0);
        usize::try_from(usable / self.leading.max(1)).unwrap_or(0).max(1)
    }
}

/// Renders `text` as a paginated PDF and returns the file bytes.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn render_pdf(text: &str, layout: &PageLayout) -> Result<Vec<u8>, ExportError> {
    let lines = wrap_text(&normalize(text), layout.chars_per_line());
    let mut pages: Vec<&[String]> = lines.chunks(layout.lines_per_page()).collect();
    if pages.is_empty() {
        pages.push(&[]);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { FONT_NAME => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page_lines in &pages {
        let content = page_content(page_lines, layout);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(layout.width),
            Object::Integer(layout.height),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = info_dictionary(&mut doc);
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn info_dictionary(doc: &mut Document) -> ObjectId {
    let created = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
    doc.add_object(dictionary! {
        "Title" => Object::string_literal("Summary"),
        "Producer" => Object::string_literal(concat!("docsum ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(created),
    })
}

fn page_content(lines: &[String], layout: &PageLayout) -> Content {
    let mut operations = Vec::new();
    if lines.is_empty() {
        return Content { operations };
    }

    let first_baseline = layout.height - layout.margin - layout.font_size;
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![Object::Name(FONT_NAME.as_bytes().to_vec()), Object::Integer(layout.font_size)],
    ));
    operations.push(Operation::new("TL", vec![Object::Integer(layout.leading)]));
    operations.push(Operation::new(
        "Td",
        vec![Object::Integer(layout.margin), Object::Integer(first_baseline)],
    ));
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("T*", vec![]));
        }
        if !line.is_empty() {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(line))],
            ));
        }
    }
    operations.push(Operation::new("ET", vec![]));

    Content { operations }
}

/// Drops carriage returns and control characters and expands tabs.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push('\n'),
            '\t' => out.push_str("    "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Greedy word wrap. Explicit newlines start a new line; words longer than a
/// line are split. Empty input produces no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            while chars.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                lines.push(chars[..width].iter().collect());
                chars.drain(..width);
            }
            if chars.is_empty() {
                continue;
            }

            if line_len == 0 {
                line.extend(chars.iter());
                line_len = chars.len();
            } else if line_len + 1 + chars.len() <= width {
                line.push(' ');
                line.extend(chars.iter());
                line_len += 1 + chars.len();
            } else {
                lines.push(std::mem::take(&mut line));
                line.extend(chars.iter());
                line_len = chars.len();
            }
        }

        if line_len > 0 || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// Maps text onto the WinAnsi code page used by the standard Type1 fonts.
/// Characters with no WinAnsi code become `?`.
#[must_use]
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_capacity() {
        let layout = PageLayout::default();
        assert_eq!(layout.chars_per_line(), 67);
        assert_eq!(layout.lines_per_page(), 45);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn splits_words_longer_than_a_line() {
        let lines = wrap_text("ab abcdefghij k", 4);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij k"]);
    }

    #[test]
    fn preserves_blank_lines() {
        let lines = wrap_text("one\n\ntwo", 10);
        assert_eq!(lines, vec!["one", "", "two"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn encodes_outside_code_page_as_question_mark() {
        assert_eq!(encode_win_ansi("café “ok” 日"), b"caf\xe9 \x93ok\x94 ?".to_vec());
    }
}
