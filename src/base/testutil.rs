//! Workbook fixtures for tests.

use crate::base;

/// Writes a workbook with the given sheets. Cells that parse as numbers are
/// written as numbers, empty strings are left blank, everything else is
/// written as text.
pub fn write_workbook(path: &std::path::Path, sheets: &[(&str, &[&[&str]])]) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                match value.parse::<f64>() {
                    Ok(n) => sheet.write_number(r as u32, c as u16, n).unwrap(),
                    Err(_) => sheet.write_string(r as u32, c as u16, *value).unwrap(),
                };
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Writes a single-sheet workbook.
pub fn write_sheet(path: &std::path::Path, rows: &[&[&str]]) {
    write_workbook(path, &[("Sheet1", rows)])
}

/// Reads every row of the first sheet, header included.
pub fn read_sheet(path: &std::path::Path) -> Vec<Vec<base::Cell>> {
    let table = base::loader::load_table(path, None).unwrap();
    let header = table
        .headers()
        .iter()
        .map(|h| base::Cell::Text(h.clone()))
        .collect::<Vec<_>>();
    std::iter::once(header)
        .chain(table.rows().map(<[base::Cell]>::to_vec))
        .collect()
}
