use crate::base;

/// Text of the particulars cell of a subtotal and of the label cell of the
/// grand total.
pub const TOTAL: &str = "TOTAL";

/// One line of a project report.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow {
    /// A transaction. `label` and `balance` are only set on the first line
    /// of a customer group.
    LineItem {
        label: Option<String>,
        balance: Option<base::Amount>,
        particulars: base::Cell,
        amount: base::Amount,
    },
    /// Closes a customer group.
    Subtotal { amount: base::Amount },
    /// Closes the report.
    GrandTotal { balance: base::Amount },
}

impl DisplayRow {
    pub fn label(&self) -> Option<&str> {
        match self {
            DisplayRow::LineItem { label, .. } => label.as_deref(),
            DisplayRow::Subtotal { .. } => None,
            DisplayRow::GrandTotal { .. } => Some(TOTAL),
        }
    }

    pub fn balance(&self) -> Option<base::Amount> {
        match self {
            DisplayRow::LineItem { balance, .. } => *balance,
            DisplayRow::Subtotal { .. } => None,
            DisplayRow::GrandTotal { balance } => Some(*balance),
        }
    }

    pub fn particulars(&self) -> Option<base::Cell> {
        match self {
            DisplayRow::LineItem { particulars, .. } => Some(particulars.clone()),
            DisplayRow::Subtotal { .. } => Some(base::Cell::from(TOTAL)),
            DisplayRow::GrandTotal { .. } => None,
        }
    }

    pub fn amount(&self) -> Option<base::Amount> {
        match self {
            DisplayRow::LineItem { amount, .. } => Some(*amount),
            DisplayRow::Subtotal { amount } => Some(*amount),
            DisplayRow::GrandTotal { .. } => None,
        }
    }

    /// Whether the row is a subtotal or the grand total.
    pub fn is_total(&self) -> bool {
        !matches!(self, DisplayRow::LineItem { .. })
    }
}

/// The display rows of one project, ending with exactly one grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout(Vec<DisplayRow>);

impl Layout {
    /// Groups `rows` by customer in order of first appearance, keeping row
    /// order within each group, and emits each group's line items followed by
    /// its subtotal. Rows without a customer key are ignored.
    pub fn new<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a base::ReportRow>,
    {
        let mut groups = Vec::<(&base::CustomerKey, Vec<&base::ReportRow>)>::new();
        let mut index = std::collections::HashMap::<&base::CustomerKey, usize>::new();
        for r in rows {
            let Some(key) = r.key() else { continue };
            let i = *index.entry(key).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[i].1.push(r);
        }

        let mut out = Vec::new();
        for (key, group) in groups {
            let cust_total = group.iter().map(|r| r.unit_price()).sum::<base::Amount>();
            for (i, r) in group.into_iter().enumerate() {
                let first = i == 0;
                out.push(DisplayRow::LineItem {
                    label: first.then(|| key.to_string()),
                    balance: first.then_some(cust_total),
                    particulars: r.doc_number().clone(),
                    amount: r.unit_price(),
                });
            }
            out.push(DisplayRow::Subtotal { amount: cust_total });
        }

        let balance = out
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Subtotal { amount } => Some(*amount),
                _ => None,
            })
            .fold(base::Amount::ZERO, |acc, a| acc + a);
        out.push(DisplayRow::GrandTotal { balance });
        Self(out)
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the layout holds nothing but the grand total.
    pub fn is_empty(&self) -> bool {
        self.0.len() <= 1
    }

    pub fn grand_total(&self) -> base::Amount {
        match self.0.last() {
            Some(DisplayRow::GrandTotal { balance }) => *balance,
            _ => base::Amount::ZERO,
        }
    }

    pub fn customer_count(&self) -> usize {
        self.0
            .iter()
            .filter(|r| matches!(r, DisplayRow::Subtotal { .. }))
            .count()
    }

    /// Renders the rows as an aligned plain-text table with `label_header` as
    /// the first column's title. Amounts are right-aligned on the decimal
    /// point. Trailing whitespace is trimmed from each line.
    pub fn to_text(&self, label_header: &str) -> String {
        fn money(c: Option<base::Amount>) -> String {
            let Some(c) = c else {
                return String::new();
            };
            let s = c.to_string();
            match s.starts_with('(') {
                true => s,
                false => s + " ",
            }
        }

        let header = [label_header, "Balance", "Particulars", "Amount"].map(String::from);
        let lines = std::iter::once(header)
            .chain(self.0.iter().map(|r| {
                [
                    r.label().unwrap_or_default().to_string(),
                    money(r.balance()),
                    r.particulars()
                        .and_then(|c| c.to_text())
                        .unwrap_or_default(),
                    money(r.amount()),
                ]
            }))
            .collect::<Vec<_>>();

        let mut widths = [0usize; 4];
        for line in &lines {
            for (w, s) in widths.iter_mut().zip(line) {
                *w = (*w).max(s.chars().count());
            }
        }

        let mut out = String::new();
        for line in &lines {
            let [label, balance, particulars, amount] = line;
            let s = format!(
                "{:<w0$}  {:>w1$}  {:<w2$}  {:>w3$}",
                label,
                balance,
                particulars,
                amount,
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
                w3 = widths[3],
            );
            out.push_str(s.trim_end());
            out.push('\n');
        }
        out
    }
}
