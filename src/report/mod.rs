//! Report module for report-summary
//!
//! Loads CSV reports into ordered rows and renders them as prompt tables.

mod loader;
mod row;
mod table;

pub use loader::{load_csv, parse_csv};
pub use row::ReportRow;
pub use table::{render_table, RenderedTable};
