//! The per-terminal flight status report and its xlsx rendering.

mod error;
mod sheet;
mod xlsx;

pub use error::ReportError;
pub use sheet::{Cell, Column, Report, ReportSummary, Sheet, display_width, export_filename};
pub use xlsx::{save_xlsx, to_workbook, to_xlsx_bytes};
