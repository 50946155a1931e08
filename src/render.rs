//! HTML dual view of a transcript
//!
//! Every [`TranscriptRecord`] becomes a box with the source text on top and
//! its Braille below, so that a proof reader can check the transcription
//! character by character. Records flagged as errors are highlighted.

use std::fmt::Write;

use crate::translator::TranscriptRecord;

const BREAK_LINE: &str = r#"<div class="break-line"></div>"#;

const STYLE: &str = "\
.braille-container { display: flex; flex-wrap: wrap; gap: 5px; }
.braille-box { border: 1px solid #ccc; padding: 5px; margin: 2px; text-align: center; }
.error-box { border: 2px solid #ff4b4b; background-color: #ffe6e6; }
.char-top { font-size: 14px; color: #495057; }
.braille-bottom { font-weight: bold; }
.break-line { flex-basis: 100%; height: 0; }
";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render `records` as a flow of boxes.
///
/// A line is broken before a record whose cells would not fit into
/// `cells_per_line` anymore and after every line break of the input.
pub fn render(records: &[TranscriptRecord], cells_per_line: usize, font_size: u32) -> String {
    let mut html = String::from(r#"<div class="braille-container">"#);
    let mut line_length = 0;
    for record in records {
        let length = record.cells.chars().count();
        if line_length + length > cells_per_line {
            html.push_str(BREAK_LINE);
            line_length = 0;
        }
        let class = if record.is_error {
            "braille-box error-box"
        } else {
            "braille-box"
        };
        // writing to a String cannot fail
        let _ = write!(
            html,
            r#"<div class="{}"><div class="char-top">{}</div><div class="braille-bottom" style="font-size: {}px;">{}</div></div>"#,
            class,
            escape(&record.source),
            font_size,
            escape(&record.cells)
        );
        line_length += length;
        if record.source == "\n" {
            html.push_str(BREAK_LINE);
            line_length = 0;
        }
    }
    html.push_str("</div>");
    html
}

/// A complete HTML page around [`render`]
pub fn document(records: &[TranscriptRecord], cells_per_line: usize, font_size: u32) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Braille dual view</title><style>\n{}</style></head>\n<body><h2>Braille dual view</h2>{}</body></html>\n",
        STYLE,
        render(records, cells_per_line, font_size)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, cells: &str, is_error: bool) -> TranscriptRecord {
        TranscriptRecord::new(source, cells, is_error)
    }

    #[test]
    fn one_box_per_record() {
        let html = render(&[record("媽", "⠍⠜⠄", false)], 32, 22);
        assert_eq!(
            html,
            r#"<div class="braille-container"><div class="braille-box"><div class="char-top">媽</div><div class="braille-bottom" style="font-size: 22px;">⠍⠜⠄</div></div></div>"#
        );
    }

    #[test]
    fn errors_are_highlighted() {
        let html = render(&[record("字", "⠄", true)], 32, 22);
        assert!(html.contains(r#"class="braille-box error-box""#));
    }

    #[test]
    fn source_is_escaped() {
        let html = render(&[record("<", "⠀⠐⠅⠀", false)], 32, 22);
        assert!(html.contains(r#"<div class="char-top">&lt;</div>"#));
    }

    #[test]
    fn breaks_before_overflow() {
        let records = [
            record("媽", "⠍⠜⠄", false),
            record("媽", "⠍⠜⠄", false),
            record("媽", "⠍⠜⠄", false),
        ];
        let html = render(&records, 6, 22);
        assert_eq!(html.matches(BREAK_LINE).count(), 1);
        // the break comes before the third box
        let (before, _) = html.split_once(BREAK_LINE).unwrap();
        assert_eq!(before.matches("braille-box").count(), 2);
    }

    #[test]
    fn breaks_after_newline() {
        let records = [
            record("1", "⠼⠂", false),
            record("\n", "\n", false),
            record("2", "⠼⠆", false),
        ];
        let html = render(&records, 32, 22);
        assert_eq!(html.matches(BREAK_LINE).count(), 1);
    }

    #[test]
    fn document_wraps_fragment() {
        let html = document(&[record("媽", "⠍⠜⠄", false)], 32, 22);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="braille-container">"#));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
