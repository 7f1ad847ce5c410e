//! Workbook rendering.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use super::error::ReportError;
use super::sheet::{Column, Report, Sheet};

const HEADER_FILL: u32 = 0x1F4E79;
const BORDER_COLOR: u32 = 0xCCCCCC;
const FONT_NAME: &str = "맑은 고딕";
const FONT_SIZE: f64 = 10.0;

/// Maximum data rows per worksheet (the format allows 1,048,576 including the header).
const MAX_DATA_ROWS: usize = 1_048_575;

fn body_format() -> Format {
    Format::new()
        .set_font_name(FONT_NAME)
        .set_font_size(FONT_SIZE)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_COLOR))
}

fn header_format() -> Format {
    body_format()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    header: &Format,
    body: &Format,
) -> Result<(), ReportError> {
    if sheet.rows.len() > MAX_DATA_ROWS {
        return Err(ReportError::TooManyRows {
            sheet: sheet.name().to_string(),
            rows: sheet.rows.len(),
        });
    }

    worksheet.set_name(sheet.name())?;

    for (col, title) in (0u16..).zip(sheet.headers()) {
        worksheet.write_string_with_format(0, col, title, header)?;
    }

    for (row, cells) in (1u32..).zip(&sheet.rows) {
        for (col, cell) in (0u16..).zip(cells) {
            worksheet.write_string_with_format(row, col, cell.as_str(), body)?;
        }
    }

    for (col, width) in (0u16..).zip(sheet.column_widths()) {
        worksheet.set_column_width(col, width as f64)?;
    }

    // Row count was bounded above.
    let last_row = sheet.rows.len() as u32;
    let last_col = (Column::ALL.len() - 1) as u16;
    worksheet.autofilter(0, 0, last_row, last_col)?;

    Ok(())
}

/// Lay out every sheet of `report` in a new workbook.
pub fn to_workbook(report: &Report) -> Result<Workbook, ReportError> {
    let header = header_format();
    let body = body_format();

    let mut workbook = Workbook::new();
    for sheet in &report.sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet, &header, &body)?;
    }
    Ok(workbook)
}

/// Render `report` as xlsx bytes, for download responses.
pub fn to_xlsx_bytes(report: &Report) -> Result<Vec<u8>, ReportError> {
    let mut workbook = to_workbook(report)?;
    Ok(workbook.save_to_buffer()?)
}

/// Render `report` and write it to `path`.
pub fn save_xlsx(report: &Report, path: &Path) -> Result<(), ReportError> {
    let bytes = to_xlsx_bytes(report)?;
    std::fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })
}
