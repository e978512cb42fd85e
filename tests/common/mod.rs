//! Shared fixtures: real .xlsx workbooks written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

/// A cell in a fixture sheet
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    /// Year, month, day, written with a `yyyy-mm-dd` number format
    Date(u16, u8, u8),
    Blank,
}

pub use Cell::{Blank, Date, Number, Text};

/// Write a workbook; each sheet is a name and rows of cells (row 0 is the header)
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                        worksheet
                            .write_datetime_with_format(r as u32, c as u16, &date, &date_format)
                            .unwrap();
                    }
                    Blank => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
    path.to_path_buf()
}

/// The requirements workbook at the first default location under `root`
pub fn requirements_workbook(root: &Path) -> PathBuf {
    write_workbook(
        &root.join("docs/Requirment Document .xlsx"),
        &[
            (
                "Requirment Document",
                vec![
                    vec![Text("Module"), Text("Screen Name"), Text("Priority")],
                    vec![Text("Core"), Text("User Authentication System"), Number(1.0)],
                    vec![Text("Core"), Text("Dashboard Overview"), Number(1.0)],
                    vec![Text("Stock"), Text("Inventory Management"), Number(2.0)],
                    vec![Text("Stock"), Text("Add Item"), Number(2.0)],
                    vec![Text("Money"), Text("Reports"), Number(3.0)],
                    vec![Text("Money"), Text("  Reports  "), Number(3.0)],
                    vec![Text("Misc"), Blank, Number(4.0)],
                    vec![Text("Misc"), Text("NaN"), Blank],
                ],
            ),
            (
                "Navigation",
                vec![
                    vec![Text("From"), Text("To"), Text("Also")],
                    vec![Text("Login"), Text("Dashboard"), Blank],
                    vec![Text("Dashboard"), Text("Sales (Retail)"), Text("Reports")],
                ],
            ),
        ],
    )
}
