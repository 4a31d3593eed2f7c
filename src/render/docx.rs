//! DOCX backend: translates the assembled document into structural
//! commands against the document-object library.

use std::io::{Cursor, Seek, Write};

use docx_rs::{
    AlignmentType, BreakType, Docx, FieldCharType, Footer, Header, IndentLevel, InstrText,
    NumberingId, Pic, Run, RunFonts, VertAlignType,
};

use crate::error::{Error, Result};
use crate::model::{
    Alignment, AssembledDocument, Block, FieldCode, InlineContent, NamedStyle, Paragraph, RunStyle,
    Table, TextRun,
};

use super::styles;

/// Pack an assembled document into DOCX bytes.
pub fn to_docx(doc: &AssembledDocument) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_docx(doc, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Pack an assembled document into any seekable writer.
pub fn write_docx<W: Write + Seek>(doc: &AssembledDocument, writer: W) -> Result<()> {
    let mut docx = styles::register(Docx::new());

    if let Some(header) = &doc.header {
        docx = docx.header(Header::new().add_paragraph(build_paragraph(header)));
    }
    if let Some(footer) = &doc.footer {
        docx = docx.footer(Footer::new().add_paragraph(build_paragraph(footer)));
    }

    for block in &doc.body {
        docx = match block {
            Block::Paragraph(p) => docx.add_paragraph(build_paragraph(p)),
            Block::Table(t) => docx.add_table(build_table(t)),
            Block::Image {
                data,
                width_emu,
                height_emu,
                alignment,
            } => {
                let mut p = docx_rs::Paragraph::new()
                    .add_run(Run::new().add_image(Pic::new(data).size(*width_emu, *height_emu)));
                if *alignment != Alignment::Left {
                    p = p.align(map_alignment(*alignment));
                }
                docx.add_paragraph(p)
            }
            Block::PageBreak => docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            ),
        };
    }

    log::debug!("Packing {} body blocks into DOCX", doc.block_count());
    docx.build()
        .pack(writer)
        .map_err(|e| Error::Docx(e.to_string()))
}

fn build_paragraph(p: &Paragraph) -> docx_rs::Paragraph {
    let mut out = docx_rs::Paragraph::new();

    if let Some(level) = p.heading_level {
        out = out.style(&styles::heading_style_id(level));
    } else if let Some(named) = p.named_style {
        out = out.style(named.style_id());
        match named {
            NamedStyle::ListBullet => {
                out = out.numbering(
                    NumberingId::new(styles::BULLET_NUMBERING),
                    IndentLevel::new(0),
                );
            }
            NamedStyle::ListNumber => {
                out = out.numbering(
                    NumberingId::new(styles::DECIMAL_NUMBERING),
                    IndentLevel::new(0),
                );
            }
            _ => {}
        }
    }

    if p.alignment != Alignment::Left {
        out = out.align(map_alignment(p.alignment));
    }

    for inline in &p.content {
        out = match inline {
            InlineContent::Text(run) => out.add_run(build_run(run)),
            InlineContent::Field { code, placeholder } => {
                out.add_run(build_field_run(code, placeholder.as_ref()))
            }
        };
    }
    out
}

fn build_run(run: &TextRun) -> Run {
    apply_style(Run::new().add_text(run.text.as_str()), &run.style)
}

/// Emit a field as the begin / instruction / end character triplet, with
/// an optional separate-then-placeholder segment. The instruction text
/// is passed through verbatim for the viewer to resolve.
fn build_field_run(code: &FieldCode, placeholder: Option<&TextRun>) -> Run {
    let mut run = Run::new();
    if let Some(ph) = placeholder {
        run = apply_style(run, &ph.style);
    }
    run = run
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::Unsupported(code.instruction()));
    if let Some(ph) = placeholder {
        run = run
            .add_field_char(FieldCharType::Separate, false)
            .add_text(ph.text.as_str());
    }
    run.add_field_char(FieldCharType::End, false)
}

fn apply_style(mut run: Run, style: &RunStyle) -> Run {
    // The East Asian face tracks the base font, matching conventional
    // word-processor behavior for mixed-script text.
    run = run
        .fonts(
            RunFonts::new()
                .ascii(&style.font_name)
                .hi_ansi(&style.font_name)
                .east_asia(&style.font_name),
        )
        .size(half_points(style.size_pt));
    if style.bold {
        run = run.bold();
    }
    if style.italic {
        run = run.italic();
    }
    if style.underline {
        run = run.underline("single");
    }
    if style.superscript {
        // vert_align lives on the run property, not the run builder.
        run.run_property = run.run_property.vert_align(VertAlignType::SuperScript);
    }
    run
}

fn build_table(table: &Table) -> docx_rs::Table {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            docx_rs::TableRow::new(
                row.cells
                    .iter()
                    .map(|cell| {
                        let mut out = docx_rs::TableCell::new();
                        for p in &cell.content {
                            out = out.add_paragraph(build_paragraph(p));
                        }
                        out
                    })
                    .collect(),
            )
        })
        .collect();
    docx_rs::Table::new(rows).style(styles::TABLE_STYLE_ID)
}

fn map_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Justified,
    }
}

/// OOXML run sizes are half-points.
fn half_points(size_pt: f32) -> usize {
    (size_pt * 2.0).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_points() {
        assert_eq!(half_points(11.0), 22);
        assert_eq!(half_points(28.0), 56);
        assert_eq!(half_points(10.5), 21);
    }

    #[test]
    fn test_superscript_goes_through_run_property() {
        let run = build_run(&TextRun::new(
            " [1]",
            RunStyle::base("Calibri").superscript(),
        ));
        assert!(run.run_property.vert_align.is_some());

        let plain = build_run(&TextRun::new("body", RunStyle::base("Calibri")));
        assert!(plain.run_property.vert_align.is_none());
    }

    #[test]
    fn test_footnote_marker_packs() {
        let mut doc = AssembledDocument::new();
        let mut p = Paragraph::with_run(TextRun::new("claim", RunStyle::base("Calibri")));
        p.add_run(TextRun::new(" [1]", RunStyle::base("Calibri").superscript()));
        doc.push_paragraph(p);

        let bytes = to_docx(&doc).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_document_packs() {
        let doc = AssembledDocument::new();
        let bytes = to_docx(&doc).unwrap();
        // ZIP local file header magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_body_document_packs() {
        let mut doc = AssembledDocument::new();
        doc.push_paragraph(Paragraph::with_run(TextRun::new(
            "hello",
            RunStyle::base("Calibri"),
        )));
        doc.push_page_break();
        let bytes = to_docx(&doc).unwrap();
        assert!(bytes.len() > 500);
    }
}
