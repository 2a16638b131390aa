use crate::base;
use crate::base::column::ReportColumn;

/// One transaction line of the cleaned report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    line: usize,
    key: Option<base::CustomerKey>,
    doc_number: base::Cell,
    unit_price: base::Amount,
}

impl ReportRow {
    pub fn new(
        line: usize,
        key: Option<base::CustomerKey>,
        doc_number: base::Cell,
        unit_price: base::Amount,
    ) -> Self {
        Self {
            line,
            key,
            doc_number,
            unit_price,
        }
    }

    /// Sheet row number, counting the header as row 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// `None` if the code or customer is still missing after forward-filling.
    pub fn key(&self) -> Option<&base::CustomerKey> {
        self.key.as_ref()
    }

    pub fn doc_number(&self) -> &base::Cell {
        &self.doc_number
    }

    pub fn unit_price(&self) -> base::Amount {
        self.unit_price
    }
}

/// The report after normalization. Rows keep their sheet order and are not
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report(Vec<ReportRow>);

impl Report {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportRow> {
        self.0.iter()
    }
}

impl FromIterator<ReportRow> for Report {
    fn from_iter<T: IntoIterator<Item = ReportRow>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Cleans the raw report table:
/// - `CODE` and `CUSTOMER` are forward-filled from the nearest preceding row
///   with a value. `DATE` is required but no output reads it, so it is not
///   carried.
/// - rows without a `DOC. NO.` are dropped
/// - `CODE` and `CUSTOMER` become trimmed text
/// - `UNIT PRICE` becomes a number, or zero if it is not one
pub fn normalize(table: &base::Table) -> Result<Report, base::SchemaError> {
    let cols = base::column::Resolved::<ReportColumn>::new(table)?;
    let cell = |i: usize, c: ReportColumn| table.cell(i, cols.get(c));

    let mut code = None::<String>;
    let mut customer = None::<String>;
    let mut rows = Vec::with_capacity(table.len());
    for i in 0..table.len() {
        fill(&mut code, cell(i, ReportColumn::Code), base::Cell::to_text);
        fill(&mut customer, cell(i, ReportColumn::Customer), base::Cell::to_text);

        let doc_number = cell(i, ReportColumn::DocNo);
        if doc_number.is_missing() {
            continue;
        }
        let key = match (&code, &customer) {
            (Some(code), Some(customer)) => Some(base::CustomerKey::new(code, customer)),
            _ => None,
        };
        rows.push(ReportRow {
            line: i + 2,
            key,
            doc_number: doc_number.clone(),
            unit_price: to_amount(cell(i, ReportColumn::UnitPrice)),
        });
    }
    Ok(Report(rows))
}

fn fill<T, F>(slot: &mut Option<T>, cell: &base::Cell, convert: F)
where
    F: FnOnce(&base::Cell) -> Option<T>,
{
    if cell.is_missing() {
        return;
    }
    if let Some(v) = convert(cell) {
        *slot = Some(v);
    }
}

/// Numeric coercion of a unit price. Anything that is not a number is zero,
/// including text with thousands separators.
pub fn to_amount(cell: &base::Cell) -> base::Amount {
    match cell {
        base::Cell::Number(n) => base::Amount::from_f64(*n).unwrap_or_default(),
        base::Cell::Text(s) => s.parse().unwrap_or_default(),
        _ => base::Amount::ZERO,
    }
}
