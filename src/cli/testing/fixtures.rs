//! Input sheets shared by command tests.

/// Project `Alpha` with the single customer `Acme`.
pub const MASTERLIST: &[&[&str]] = &[&["Project", "Name"], &["Alpha", "Acme"]];

/// Two transactions for `C1 - Acme`; the second row relies on forward fill.
pub const REPORT: &[&[&str]] = &[
    &["DATE", "CODE", "CUSTOMER", "DOC. NO.", "UNIT PRICE"],
    &["45000", "C1", "Acme", "INV1", "100"],
    &["", "", "", "INV2", "50"],
];
