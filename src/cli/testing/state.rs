use crate::base;

/// Suffix of every report file a run writes.
const REPORT_SUFFIX: &str = "_report.xlsx";

/// The expected or actual objects read from a working directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    /// Rows of every report workbook, keyed by path relative to the working
    /// directory with `/` separators.
    reports: std::collections::BTreeMap<String, Vec<Vec<base::Cell>>>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Adds a report workbook at `path`, header row included. Cells that
    /// parse as numbers are expected as numbers and empty strings as blanks.
    pub fn with_report(mut self, path: &str, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|s| to_cell(s)).collect())
            .collect();
        self.reports.insert(path.to_string(), rows);
        self
    }

    /// Reads the config and every report workbook under `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = match fs.path::<base::Config>().exists() {
            true => Some(fs.read::<base::Config>().unwrap()),
            false => None,
        };
        let mut reports = std::collections::BTreeMap::new();
        for path in walk(fs.dir()) {
            let rel = path.strip_prefix(fs.dir()).unwrap();
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if rel.ends_with(REPORT_SUFFIX) {
                reports.insert(rel, base::testutil::read_sheet(&path));
            }
        }
        Self { config, reports }
    }
}

fn to_cell(s: &str) -> base::Cell {
    if s.is_empty() {
        return base::Cell::Empty;
    }
    match s.parse::<f64>() {
        Ok(n) => base::Cell::Number(n),
        Err(_) => base::Cell::from(s),
    }
}

/// Files under `dir`, recursively.
fn walk(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    raw_config: Option<&'a str>,
    workbooks: Vec<(&'a str, &'a [&'a [&'a str]])>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets config file contents that need not parse.
    pub fn with_raw_config(mut self, s: &'a str) -> Self {
        self.raw_config = Some(s);
        self
    }

    /// Adds a single-sheet input workbook at `path`, written with
    /// [`base::testutil::write_sheet`].
    pub fn with_workbook(mut self, path: &'a str, rows: &'a [&'a [&'a str]]) -> Self {
        self.workbooks.push((path, rows));
        self
    }

    /// Writes the contents to `fs`. Panics if the config is not a valid
    /// serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        if let Some(s) = self.raw_config {
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        for (path, rows) in &self.workbooks {
            let path = fs.resolve(path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            base::testutil::write_sheet(&path, rows);
        }
    }

    /// The state `to_fs` leaves behind. A raw config is not represented.
    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        for (path, rows) in &self.workbooks {
            if path.ends_with(REPORT_SUFFIX) {
                os = os.with_report(path, rows);
            }
        }
        os
    }
}

pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let (fs, _td) = tempfs();
        let s = StrState::new()
            .with_config(r#"{"outputDir":"out"}"#)
            .with_workbook("masterlist.xlsx", &[&["Project", "Name"], &["A", "B"]])
            .with_workbook("out/X_report.xlsx", &[&["H", "I", "J"], &["", "x", "1.5"], &["y", "", ""]]);
        s.to_fs(&fs);
        assert_eq!(State::from_fs(&fs), s.to_state());
        assert_eq!(State::from_fs(&fs).reports.len(), 1);
    }

    #[test]
    fn test_empty_dir() {
        let (fs, _td) = tempfs();
        std::fs::create_dir(fs.resolve("project_reports")).unwrap();
        assert_eq!(State::from_fs(&fs), State::new());
    }
}
