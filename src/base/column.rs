use crate::base;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TableKind {
    Masterlist,
    Report,
}

/// A required column of an input table.
pub trait Column: Copy + PartialEq + strum::VariantArray + Into<&'static str> {
    const TABLE: TableKind;

    /// Whether a header cell names the column `name`.
    fn matches(header: &str, name: &str) -> bool;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr, strum::VariantArray, strum::Display,
)]
pub enum ReportColumn {
    #[strum(serialize = "DATE")]
    Date,
    #[strum(serialize = "CODE")]
    Code,
    #[strum(serialize = "CUSTOMER")]
    Customer,
    #[strum(serialize = "DOC. NO.")]
    DocNo,
    #[strum(serialize = "UNIT PRICE")]
    UnitPrice,
}

impl Column for ReportColumn {
    const TABLE: TableKind = TableKind::Report;

    /// Report headers are matched ignoring case and surrounding whitespace.
    fn matches(header: &str, name: &str) -> bool {
        header.trim().to_uppercase() == name
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr, strum::VariantArray, strum::Display,
)]
pub enum MasterlistColumn {
    Project,
    Name,
}

impl Column for MasterlistColumn {
    const TABLE: TableKind = TableKind::Masterlist;

    /// Masterlist headers are matched exactly, ignoring surrounding whitespace.
    fn matches(header: &str, name: &str) -> bool {
        header.trim() == name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{table} is missing required column(s): {}", .missing.join(", "))]
pub struct SchemaError {
    pub table: TableKind,
    pub missing: Vec<&'static str>,
}

/// Positions of every column of `C` within a table's header row.
#[derive(Debug)]
pub struct Resolved<C> {
    positions: Vec<usize>,
    _column: std::marker::PhantomData<C>,
}

impl<C> Resolved<C>
where
    C: Column,
{
    /// Resolves every column of `C` against `table`'s headers. If any are
    /// absent, fails naming all of them.
    pub fn new(table: &base::Table) -> Result<Self, SchemaError> {
        let mut positions = Vec::with_capacity(C::VARIANTS.len());
        let mut missing = Vec::new();
        for &column in C::VARIANTS {
            let name: &'static str = column.into();
            match table.position(|h| C::matches(h, name)) {
                Some(i) => positions.push(i),
                None => missing.push(name),
            }
        }
        if !missing.is_empty() {
            return Err(SchemaError {
                table: C::TABLE,
                missing,
            });
        }
        Ok(Self {
            positions,
            _column: std::marker::PhantomData,
        })
    }

    pub fn get(&self, column: C) -> usize {
        let i = C::VARIANTS
            .iter()
            .position(|&c| c == column)
            .unwrap_or_default();
        self.positions[i]
    }
}
