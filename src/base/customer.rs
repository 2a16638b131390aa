/// Separator between code and name in a customer's display label.
pub const SEPARATOR: &str = " - ";

/// Identity of a customer in the report: a trimmed code and a trimmed name.
/// Displays as `CODE - CUSTOMER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerKey {
    code: String,
    name: String,
}

impl CustomerKey {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.trim().to_string(),
            name: name.trim().to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.code, SEPARATOR, self.name)
    }
}

/// A customer as named in the masterlist.
///
/// A name containing [`SEPARATOR`] is a full `CODE - CUSTOMER` key, split at
/// the first separator. Any other name refers to a customer by name alone.
/// Neither form is trimmed: the masterlist must match the report's formatting
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomerRef {
    Key { code: String, name: String },
    Name(String),
}

impl CustomerRef {
    pub fn matches(&self, key: &CustomerKey) -> bool {
        match self {
            CustomerRef::Key { code, name } => code == key.code() && name == key.name(),
            CustomerRef::Name(name) => name == key.name(),
        }
    }
}

impl From<&str> for CustomerRef {
    fn from(s: &str) -> Self {
        match s.split_once(SEPARATOR) {
            Some((code, name)) => CustomerRef::Key {
                code: code.to_string(),
                name: name.to_string(),
            },
            None => CustomerRef::Name(s.to_string()),
        }
    }
}
