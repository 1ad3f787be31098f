//! Plain-text table rendering for prompts

use crate::report::ReportRow;

const FIELD_SEPARATOR: &str = ", ";

/// A rendered table together with how many rows it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub text: String,
    pub shown: usize,
    pub total: usize,
}

impl RenderedTable {
    pub fn is_truncated(&self) -> bool {
        self.total > self.shown
    }
}

/// Render at most `max_rows` rows as comma-joined lines.
///
/// The header comes from the first selected row. Every data line follows the
/// header's column order, with absent columns rendered as empty strings.
pub fn render_table(rows: &[ReportRow], max_rows: usize) -> RenderedTable {
    let selected = &rows[..rows.len().min(max_rows)];

    let text = match selected.first() {
        Some(first) => {
            let columns: Vec<&str> = first.columns().collect();
            let mut lines = Vec::with_capacity(selected.len() + 1);
            lines.push(columns.join(FIELD_SEPARATOR));
            for row in selected {
                let values: Vec<&str> = columns
                    .iter()
                    .map(|column| row.get(column).unwrap_or_default())
                    .collect();
                lines.push(values.join(FIELD_SEPARATOR));
            }
            lines.join("\n")
        }
        None => String::new(),
    };

    RenderedTable {
        text,
        shown: selected.len(),
        total: rows.len(),
    }
}
