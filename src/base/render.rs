use crate::base;

/// Excel accounting format: two decimals, thousands separators, negatives in
/// parentheses and zero shown as a dash.
pub const ACCOUNTING_FORMAT: &str = r#"_(#,##0.00_);_((#,##0.00);_("-"??_);_(@_)"#;

const HEADERS: [&str; 3] = ["Balance", "Particulars", "Amount"];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to write '{}'", path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Header,
    Text,
    Accounting,
    TotalText,
    TotalAccounting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Blank,
    Text(String),
    Number(f64),
}

impl From<Option<base::Amount>> for Value {
    fn from(value: Option<base::Amount>) -> Self {
        match value {
            Some(c) => Value::Number(c.to_f64()),
            None => Value::Blank,
        }
    }
}

impl From<Option<base::Cell>> for Value {
    fn from(value: Option<base::Cell>) -> Self {
        match value {
            Some(base::Cell::Number(n)) => Value::Number(n),
            Some(c) => c.to_text().map(Value::Text).unwrap_or(Value::Blank),
            None => Value::Blank,
        }
    }
}

/// A cell of the output sheet before it is written.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub value: Value,
    pub style: Style,
}

/// Writes project layouts as `.xlsx` workbooks.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    label_header: String,
    font_name: String,
    font_size: f64,
}

impl Renderer {
    pub fn new(config: &base::Config) -> Self {
        Self {
            label_header: config.label_header.clone(),
            font_name: config.font_name.clone(),
            font_size: config.font_size,
        }
    }

    /// Path of `project`'s report inside `output_dir`.
    pub fn report_path(output_dir: &std::path::Path, project: &str) -> std::path::PathBuf {
        output_dir.join(format!("{}_report.xlsx", base::util::sanitize_file_stem(project)))
    }

    /// Lays out the header row followed by one row per display row. The
    /// balance and amount columns of every data row use the accounting
    /// format; total rows are bold.
    pub fn grid(&self, layout: &base::Layout) -> Vec<[GridCell; 4]> {
        let [balance, particulars, amount] = HEADERS;
        let header = [self.label_header.as_str(), balance, particulars, amount].map(|h| GridCell {
            value: Value::Text(h.to_string()),
            style: Style::Header,
        });

        let rows = layout.rows().iter().map(|r| {
            let (text, accounting) = match r.is_total() {
                true => (Style::TotalText, Style::TotalAccounting),
                false => (Style::Text, Style::Accounting),
            };
            [
                GridCell {
                    value: r.label().map(|s| Value::Text(s.to_string())).unwrap_or(Value::Blank),
                    style: text,
                },
                GridCell {
                    value: r.balance().into(),
                    style: accounting,
                },
                GridCell {
                    value: r.particulars().into(),
                    style: text,
                },
                GridCell {
                    value: r.amount().into(),
                    style: accounting,
                },
            ]
        });
        std::iter::once(header).chain(rows).collect()
    }

    pub fn to_bytes(&self, layout: &base::Layout) -> Result<Vec<u8>, RenderError> {
        let formats = Formats::new(self);
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in self.grid(layout).iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                let format = formats.get(cell.style);
                match &cell.value {
                    Value::Blank => sheet.write_blank(r, c, format)?,
                    Value::Text(s) => sheet.write_string_with_format(r, c, s, format)?,
                    Value::Number(n) => sheet.write_number_with_format(r, c, *n, format)?,
                };
            }
        }
        sheet.autofit();
        Ok(workbook.save_to_buffer()?)
    }

    /// Renders `layout` and atomically writes it to `path`.
    pub fn write(
        &self,
        fs: &base::Fs,
        path: &std::path::Path,
        layout: &base::Layout,
    ) -> Result<(), RenderError> {
        let bytes = self.to_bytes(layout)?;
        fs.write_atomic(path, &bytes).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

struct Formats {
    header: rust_xlsxwriter::Format,
    text: rust_xlsxwriter::Format,
    accounting: rust_xlsxwriter::Format,
    total_text: rust_xlsxwriter::Format,
    total_accounting: rust_xlsxwriter::Format,
}

impl Formats {
    fn new(renderer: &Renderer) -> Self {
        let text = rust_xlsxwriter::Format::new()
            .set_font_name(renderer.font_name.as_str())
            .set_font_size(renderer.font_size);
        let accounting = text.clone().set_num_format(ACCOUNTING_FORMAT);
        Self {
            header: text.clone().set_bold(),
            total_text: text.clone().set_bold(),
            total_accounting: accounting.clone().set_bold(),
            text,
            accounting,
        }
    }

    fn get(&self, style: Style) -> &rust_xlsxwriter::Format {
        match style {
            Style::Header => &self.header,
            Style::Text => &self.text,
            Style::Accounting => &self.accounting,
            Style::TotalText => &self.total_text,
            Style::TotalAccounting => &self.total_accounting,
        }
    }
}
