//! Report rendering errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("sheet {sheet} has {rows} rows, more than a worksheet holds")]
    TooManyRows { sheet: String, rows: usize },

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
