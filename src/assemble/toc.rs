//! Table-of-contents field builder.

use crate::model::{AssembledDocument, FieldCode, Paragraph, RunStyle, TextRun};

use super::options::AssembleOptions;

/// Placeholder shown until a viewer refreshes the TOC field.
pub const TOC_PLACEHOLDER: &str = "Right-click to update field.";

/// Emit a paragraph instructing the viewer to build a table of contents
/// covering heading levels 1 through 3.
pub fn add_table_of_contents(doc: &mut AssembledDocument, options: &AssembleOptions) {
    let mut p = Paragraph::new();
    p.add_field(
        FieldCode::TableOfContents {
            from_level: 1,
            to_level: 3,
        },
        Some(TextRun::new(
            TOC_PLACEHOLDER,
            RunStyle::base(&options.base_font),
        )),
    );
    doc.push_paragraph(p);
}
