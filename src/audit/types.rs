use std::collections::HashMap;
use std::ops::AddAssign;

pub const DEFAULT_IDENTIFIER_COLUMN: &str = "SKU";
pub const DEFAULT_LINK_COLUMN: &str = "Origin URL";

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// One row of a tabular source, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed value of `name`, empty when the field is absent.
    ///
    /// The ASCII separators U+001C..U+001F count as whitespace here.
    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name)
            .map(|value| value.trim_matches(is_blank))
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub identifier: String,
    pub link: String,
}

impl FieldSpec {
    pub fn new(identifier: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            link: link.into(),
        }
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFIER_COLUMN, DEFAULT_LINK_COLUMN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditResult {
    pub total: u64,
    pub with_identifier: u64,
    pub with_link: u64,
    pub with_both: u64,
    pub missing_link_identifiers: Vec<String>,
}

impl AuditResult {
    /// Rows that carry an identifier but no link.
    ///
    /// Derived from the counters so it stays correct for summed results,
    /// whose identifier list is left empty.
    pub fn missing_link_count(&self) -> u64 {
        self.with_identifier.saturating_sub(self.with_both)
    }
}

/// Adds the counters only; `missing_link_identifiers` is left untouched.
impl AddAssign<&AuditResult> for AuditResult {
    fn add_assign(&mut self, other: &AuditResult) {
        self.total += other.total;
        self.with_identifier += other.with_identifier;
        self.with_link += other.with_link;
        self.with_both += other.with_both;
    }
}
