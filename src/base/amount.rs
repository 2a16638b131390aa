use rust_decimal::prelude::ToPrimitive;

/// A monetary quantity at full precision. Rounding to two decimal places only
/// happens when the amount is displayed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
)]
pub struct Amount(rust_decimal::Decimal);

impl Amount {
    pub const ZERO: Self = Self(rust_decimal::Decimal::ZERO);

    /// An exact amount of hundredths.
    pub fn from_cents(cents: i64) -> Self {
        Self(rust_decimal::Decimal::new(cents, 2))
    }

    /// Converts a spreadsheet number through its shortest decimal form, so
    /// `0.1` becomes exactly `0.1`. Returns `None` for NaN, infinities, and
    /// values out of range.
    pub fn from_f64(value: f64) -> Option<Self> {
        value.to_string().parse::<rust_decimal::Decimal>().ok().map(Self)
    }

    /// Value as written to a numeric spreadsheet cell.
    pub fn to_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Hundredths after rounding half away from zero, as displayed.
    fn display_cents(self) -> i128 {
        let mut d = self
            .0
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        d.rescale(2);
        d.mantissa()
    }
}

impl std::fmt::Display for Amount {
    /// Formats with two decimal places and thousands separators. Quantities
    /// that are negative after rounding are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let signed = self.display_cents();
        let mut cents = signed.unsigned_abs();
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if signed < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).map_err(|_| std::fmt::Error)?;
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount '{0}'")]
pub struct ParseError(String);

impl std::str::FromStr for Amount {
    type Err = ParseError;

    /// Parses a plain decimal number as typed into a spreadsheet text cell.
    /// Surrounding whitespace is allowed; thousands separators are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::from_f64)
            .ok_or_else(|| ParseError(s.to_string()))
    }
}

impl TryFrom<&str> for Amount {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
