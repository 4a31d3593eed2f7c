//! Section builder: heading plus blank-line-delimited body paragraphs.

use crate::model::{AssembledDocument, Paragraph, RunStyle, TextRun};

use super::options::AssembleOptions;

/// Heading size in points for a 1-based level: `16 − 2·level`, floor 1.
pub(crate) fn heading_size_pt(level: u8) -> f32 {
    let size = 16i32 - 2 * level as i32;
    size.max(1) as f32
}

/// Add a heading at the given level.
pub fn add_heading(
    doc: &mut AssembledDocument,
    options: &AssembleOptions,
    title: &str,
    level: u8,
) {
    let style = RunStyle::base(&options.base_font)
        .sized(heading_size_pt(level))
        .bold();
    doc.push_paragraph(Paragraph::heading(TextRun::new(title, style), level));
}

/// Add a section: its heading, then one 11 pt paragraph per body-text
/// segment split on blank lines.
///
/// An empty body yields a single paragraph containing one empty run.
pub fn add_section(
    doc: &mut AssembledDocument,
    options: &AssembleOptions,
    title: &str,
    content: &str,
    level: u8,
) {
    add_heading(doc, options, title, level);

    let base = RunStyle::base(&options.base_font);
    for segment in content.split("\n\n") {
        doc.push_paragraph(Paragraph::with_run(TextRun::new(segment, base.clone())));
    }
}
