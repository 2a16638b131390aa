use calamine::Reader;

use crate::base;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input file '{}' does not exist", .0.display())]
    InputNotFound(std::path::PathBuf),
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("sheet '{0}' not found")]
    SheetNotFound(String),
    #[error(transparent)]
    Workbook(#[from] calamine::Error),
}

/// Fails with [`LoadError::InputNotFound`] naming the first path that does not
/// exist. Called for every input before any of them is read.
pub fn ensure_exists<P>(paths: &[P]) -> Result<(), LoadError>
where
    P: AsRef<std::path::Path>,
{
    match paths.iter().find(|p| !p.as_ref().exists()) {
        Some(p) => Err(LoadError::InputNotFound(p.as_ref().to_path_buf())),
        None => Ok(()),
    }
}

/// Reads one sheet of a workbook into a [`base::Table`]. The first row is the
/// header row. When `sheet` is `None` the first sheet is read.
pub fn load_table(path: &std::path::Path, sheet: Option<&str>) -> Result<base::Table, LoadError> {
    ensure_exists(&[path])?;
    let mut workbook = calamine::open_workbook_auto(path)?;
    let name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(LoadError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(LoadError::NoSheets)?,
    };
    let range = workbook.worksheet_range(&name)?;
    Ok(table_from_rows(range.rows()))
}

fn table_from_rows<'a, I>(mut rows: I) -> base::Table
where
    I: Iterator<Item = &'a [calamine::Data]>,
{
    let headers = match rows.next() {
        Some(r) => r
            .iter()
            .map(|d| to_cell(d).to_text().unwrap_or_default())
            .collect(),
        None => return base::Table::default(),
    };
    let rows = rows.map(|r| r.iter().map(to_cell).collect()).collect();
    base::Table::new(headers, rows)
}

fn to_cell(data: &calamine::Data) -> base::Cell {
    use calamine::Data;
    match data {
        Data::Empty => base::Cell::Empty,
        Data::String(s) => base::Cell::Text(s.clone()),
        Data::Float(f) => base::Cell::Number(*f),
        Data::Int(i) => base::Cell::Number(*i as f64),
        Data::Bool(b) => base::Cell::Bool(*b),
        Data::DateTime(dt) => base::Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => base::Cell::Text(s.clone()),
        Data::Error(e) => base::Cell::Error(e.to_string()),
    }
}
