//! Blockquote and footnote builders.

use crate::model::{AssembledDocument, NamedStyle, Paragraph, RunStyle, TextRun};

use super::options::AssembleOptions;

/// Add a blockquote in the intense-quote style, italic at body size.
pub fn add_blockquote(doc: &mut AssembledDocument, options: &AssembleOptions, text: &str) {
    let style = RunStyle::base(&options.base_font).italic();
    doc.push_paragraph(Paragraph::with_run(TextRun::new(text, style)).styled(NamedStyle::IntenseQuote));
}

/// Add a footnote: a superscript ` [n]` marker on the last body
/// paragraph, plus a `n. {text}` paragraph at the current end of the
/// document.
///
/// Markers number sequentially per document. The footnote body is not
/// reference-linked; it simply lands wherever the document currently
/// ends.
pub fn add_footnote(doc: &mut AssembledDocument, options: &AssembleOptions, text: &str) {
    let number = doc.next_footnote();
    let base = RunStyle::base(&options.base_font);

    let marker = TextRun::new(format!(" [{number}]"), base.clone().superscript());
    match doc.last_paragraph_mut() {
        Some(p) => p.add_run(marker),
        // No referencing paragraph yet: the marker gets one of its own.
        None => doc.push_paragraph(Paragraph::with_run(marker)),
    }

    doc.push_paragraph(
        Paragraph::with_run(TextRun::new(format!("{number}. {text}"), base))
            .styled(NamedStyle::FootnoteText),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineContent;

    fn options() -> AssembleOptions {
        AssembleOptions::default()
    }

    #[test]
    fn test_blockquote_style() {
        let mut doc = AssembledDocument::new();
        add_blockquote(&mut doc, &options(), "Quoted wisdom");

        let p = doc.body[0].as_paragraph().unwrap();
        assert_eq!(p.named_style, Some(NamedStyle::IntenseQuote));
        match &p.content[0] {
            InlineContent::Text(run) => {
                assert!(run.style.italic);
                assert_eq!(run.style.size_pt, 11.0);
            }
            _ => panic!("expected text run"),
        }
    }

    #[test]
    fn test_footnote_marker_and_body() {
        let mut doc = AssembledDocument::new();
        doc.push_paragraph(Paragraph::with_run(TextRun::new(
            "Referenced claim",
            RunStyle::base("Calibri"),
        )));
        add_footnote(&mut doc, &options(), "See appendix.");

        let reference = doc.body[0].as_paragraph().unwrap();
        assert_eq!(reference.plain_text(), "Referenced claim [1]");
        match &reference.content[1] {
            InlineContent::Text(run) => assert!(run.style.superscript),
            _ => panic!("expected marker run"),
        }

        let body = doc.body[1].as_paragraph().unwrap();
        assert_eq!(body.plain_text(), "1. See appendix.");
        assert_eq!(body.named_style, Some(NamedStyle::FootnoteText));
    }

    #[test]
    fn test_footnote_numbering_increments() {
        let mut doc = AssembledDocument::new();
        doc.push_paragraph(Paragraph::with_run(TextRun::new(
            "a",
            RunStyle::base("Calibri"),
        )));
        add_footnote(&mut doc, &options(), "first");
        add_footnote(&mut doc, &options(), "second");

        assert_eq!(doc.footnote_count(), 2);
        let second_body = doc.body.last().unwrap().as_paragraph().unwrap();
        assert_eq!(second_body.plain_text(), "2. second");
    }

    #[test]
    fn test_footnote_without_reference_paragraph() {
        let mut doc = AssembledDocument::new();
        add_footnote(&mut doc, &options(), "orphan");

        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.body[0].as_paragraph().unwrap().plain_text(), " [1]");
        assert_eq!(doc.body[1].as_paragraph().unwrap().plain_text(), "1. orphan");
    }
}
