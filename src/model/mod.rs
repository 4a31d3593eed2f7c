//! Assembled document model.
//!
//! This module defines the intermediate representation produced by the
//! assembly layer and consumed by the DOCX renderer. The body is an
//! ordered, append-only sequence of block-level elements; the header and
//! footer are out-of-flow paragraph regions.

mod document;
mod field;
mod paragraph;
mod table;

pub use document::AssembledDocument;
pub use field::FieldCode;
pub use paragraph::{Alignment, InlineContent, NamedStyle, Paragraph, RunStyle, TextRun};
pub use table::{Table, TableCell, TableRow};

use serde::Serialize;

/// English Metric Units per inch, the OOXML drawing unit.
pub const EMU_PER_INCH: u32 = 914_400;

/// A block-level element in the document body.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of inline content.
    Paragraph(Paragraph),

    /// A table.
    Table(Table),

    /// An embedded image with a fixed display size.
    Image {
        /// Raw image bytes (PNG or JPEG).
        #[serde(skip_serializing)]
        data: Vec<u8>,
        /// Display width in EMU.
        width_emu: u32,
        /// Display height in EMU.
        height_emu: u32,
        /// Alignment of the anchoring paragraph.
        alignment: Alignment,
    },

    /// A hard page break.
    PageBreak,
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image { .. })
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }

    /// Get the contained paragraph, if any.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the contained table, if any.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_variants() {
        let p = Block::Paragraph(Paragraph::new());
        assert!(p.is_paragraph());
        assert!(!p.is_table());
        assert!(p.as_paragraph().is_some());

        assert!(Block::PageBreak.is_page_break());
    }
}
