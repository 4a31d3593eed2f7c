//! Document-level types.

use serde::Serialize;

use super::{Block, Paragraph, Table};

/// The assembled output document.
///
/// The body is append-only: blocks are pushed in outline order and never
/// reordered or removed. The header and footer are out-of-flow regions
/// applied to the document's single section.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssembledDocument {
    /// Ordered block-level body content.
    pub body: Vec<Block>,

    /// Running header paragraph, if set.
    pub header: Option<Paragraph>,

    /// Running footer paragraph, if set.
    pub footer: Option<Paragraph>,

    /// Count of footnotes emitted so far.
    footnote_count: u32,
}

impl AssembledDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block to the body.
    pub fn push_block(&mut self, block: Block) {
        self.body.push(block);
    }

    /// Append a paragraph to the body.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Append a table to the body.
    pub fn push_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    /// Append a hard page break.
    pub fn push_page_break(&mut self) {
        self.body.push(Block::PageBreak);
    }

    /// Set the running header.
    pub fn set_header(&mut self, paragraph: Paragraph) {
        self.header = Some(paragraph);
    }

    /// Set the running footer.
    pub fn set_footer(&mut self, paragraph: Paragraph) {
        self.footer = Some(paragraph);
    }

    /// Reserve the next footnote number (1-based).
    pub fn next_footnote(&mut self) -> u32 {
        self.footnote_count += 1;
        self.footnote_count
    }

    /// Number of footnotes emitted so far.
    pub fn footnote_count(&self) -> u32 {
        self.footnote_count
    }

    /// Mutable access to the last body paragraph, if the last block is one.
    pub fn last_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self.body.last_mut() {
            Some(Block::Paragraph(p)) => Some(p),
            _ => None,
        }
    }

    /// Number of blocks in the body.
    pub fn block_count(&self) -> usize {
        self.body.len()
    }

    /// Check if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Plain text of all body paragraphs and tables, for inspection.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.plain_text()),
                Block::Table(t) => Some(
                    t.rows
                        .iter()
                        .map(|r| r.plain_text())
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
