//! Table formatting utilities for CLI output.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};

/// One successfully spelled amount.
pub struct SpelledAmount {
    /// Raw argument as given on the command line.
    pub input: String,
    /// Sanitized amount with grouped digits.
    pub display: String,
    /// Parsed numeric value.
    pub amount: f64,
    /// Amount in words.
    pub words: String,
}

/// Format spelled amounts as a table.
pub fn format_spelling_table(rows: &[SpelledAmount]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Amount", "In words"]);

    for row in rows {
        table.add_row(vec![row.display.clone(), row.words.clone()]);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}
