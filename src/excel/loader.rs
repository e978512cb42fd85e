//! Workbook loader implementation - Excel → in-memory sheets

use crate::error::{FlowError, FlowResult};
use crate::types::{CellValue, Sheet, Workbook};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::{NaiveDateTime, Timelike};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loads every worksheet of a workbook, preserving sheet and row order
pub struct WorkbookLoader {
    path: PathBuf,
}

impl WorkbookLoader {
    /// Create a new loader for the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load all sheets. Any unreadable sheet fails the whole load.
    pub fn load(&self) -> FlowResult<Workbook> {
        let mut reader = open_workbook_auto(&self.path)
            .map_err(|e| FlowError::Load(format!("{}: {}", self.path.display(), e)))?;

        let sheet_names = reader.sheet_names().to_vec();
        tracing::debug!(path = %self.path.display(), sheets = sheet_names.len(), "opened workbook");

        let mut workbook = Workbook::new();
        for sheet_name in sheet_names {
            let range = reader.worksheet_range(&sheet_name).map_err(|e| {
                FlowError::Load(format!("sheet '{}': {}", sheet_name, e))
            })?;
            workbook.add_sheet(convert_range(&sheet_name, &range));
        }

        Ok(workbook)
    }
}

/// Convert a worksheet range: row 0 is the header, the rest is data.
///
/// The used range starts at the first non-empty column; blank leading
/// columns are put back so column indices match the sheet.
fn convert_range(sheet_name: &str, range: &Range<Data>) -> Sheet {
    let leading = match range.start() {
        Some((_, col)) => col as usize,
        None => return Sheet::new(sheet_name),
    };
    let convert_row = |cells: &[Data]| -> Vec<CellValue> {
        std::iter::repeat(CellValue::Empty)
            .take(leading)
            .chain(cells.iter().map(convert_cell))
            .collect()
    };

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(cells) => convert_row(cells),
        None => return Sheet::new(sheet_name),
    };
    let columns = column_names(&header);

    let data = rows.map(convert_row).collect();

    Sheet::with_rows(sheet_name, columns, data)
}

/// Header labels: blanks become `Unnamed: <i>`, repeats get a `.<n>` suffix
fn column_names(header: &[CellValue]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = match cell.trimmed() {
                Some(_) => cell.to_string(),
                None => format!("Unnamed: {}", idx),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) => CellValue::DateTime(format_excel_datetime(dt)),
        Data::DateTimeIso(_) | Data::DurationIso(_) => CellValue::DateTime(cell.to_string()),
    }
}

/// ISO-8601 text for a serial date; midnight drops the time part
fn format_excel_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        if let Some(duration) = dt.as_duration() {
            let secs = duration.num_seconds();
            return format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60);
        }
    } else if let Some(datetime) = dt.as_datetime() {
        return format_naive(&datetime);
    }
    dt.to_string()
}

fn format_naive(datetime: &NaiveDateTime) -> String {
    if datetime.num_seconds_from_midnight() == 0 && datetime.nanosecond() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
