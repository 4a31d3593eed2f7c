//! Table types.

use serde::Serialize;

use super::Paragraph;

/// A table with one header row followed by data rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    /// Rows in the table, header first.
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    /// Cells in the row.
    pub cells: Vec<TableCell>,

    /// Whether this is the header row.
    pub is_header: bool,
}

impl TableRow {
    /// Create a new data row.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Tab-joined plain text of the row.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Serialize)]
pub struct TableCell {
    /// Cell content.
    pub content: Vec<Paragraph>,
}

impl TableCell {
    /// Create a cell containing a single paragraph.
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            content: vec![paragraph],
        }
    }

    /// Plain text content of the cell.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
