//! Screen name extraction from the requirements sheet

use crate::types::Sheet;
use indexmap::IndexSet;

/// Header of the column holding screen names (exact, case-sensitive)
pub const SCREEN_NAME_COLUMN: &str = "Screen Name";

/// Placeholder some exports leave in blank cells
const NAN_PLACEHOLDER: &str = "nan";

/// Distinct screen names in first-seen order.
///
/// Blank cells and `nan` placeholders are skipped. A sheet without a
/// `Screen Name` column yields an empty list.
pub fn extract_screens(sheet: &Sheet) -> Vec<String> {
    let Some(col) = sheet.column_index(SCREEN_NAME_COLUMN) else {
        tracing::debug!(sheet = %sheet.name, "no '{}' column", SCREEN_NAME_COLUMN);
        return Vec::new();
    };

    let screens: IndexSet<String> = sheet
        .rows
        .iter()
        .filter_map(|row| row.get(col))
        .filter_map(|cell| cell.trimmed())
        .filter(|name| !name.eq_ignore_ascii_case(NAN_PLACEHOLDER))
        .collect();

    screens.into_iter().collect()
}
