//! Excel import for requirement workbooks
//!
//! Reads every worksheet of a workbook (xlsx, xlsm, xlsb, xls, ods) into the
//! in-memory [`Workbook`](crate::types::Workbook) model: first row as headers,
//! remaining rows as data, sheet and row order preserved.

mod loader;

pub use loader::WorkbookLoader;
