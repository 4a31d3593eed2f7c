//! Table builder.

use crate::model::{AssembledDocument, Paragraph, RunStyle, Table, TableCell, TableRow, TextRun};
use crate::spec::TableSpec;

use super::options::AssembleOptions;

/// Add a table: one header row followed by one row per input row.
///
/// Rows are normalized to the header column count: extra cells are
/// truncated, missing cells are padded with empty strings, so the
/// emitted table is always rectangular.
pub fn add_table(doc: &mut AssembledDocument, options: &AssembleOptions, spec: &TableSpec) {
    let base = RunStyle::base(&options.base_font);
    let columns = spec.column_count();

    let cell = |text: String| -> TableCell {
        TableCell::new(Paragraph::with_run(TextRun::new(text, base.clone())))
    };

    let mut table = Table::new();
    table.add_row(TableRow::header(
        spec.headers.iter().map(|h| cell(h.clone())).collect(),
    ));

    for row in &spec.rows {
        if row.len() != columns {
            log::debug!(
                "Normalizing table row with {} cells to {} columns",
                row.len(),
                columns
            );
        }
        let cells = (0..columns)
            .map(|i| {
                let text = row.get(i).map(TableSpec::cell_text).unwrap_or_default();
                cell(text)
            })
            .collect();
        table.add_row(TableRow::new(cells));
    }

    doc.push_table(table);
}
