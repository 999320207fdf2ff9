use crate::audit::{audit, AuditResult, FieldSpec, Record};
use crate::error::AuditError;
use csv::{Reader, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A comma-delimited source with a header row, read one record at a time.
pub struct CsvSource<R> {
    name: String,
    reader: Reader<R>,
    headers: Vec<String>,
}

impl CsvSource<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| AuditError::unavailable(&name, e))?;
        debug!(source = %name, "opened source");
        Self::from_reader(name, file)
    }
}

impl<R: Read> CsvSource<R> {
    /// Wraps `reader` and consumes its header row.
    pub fn from_reader(name: impl Into<String>, reader: R) -> Result<Self, AuditError> {
        let name = name.into();
        let mut reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true) // rows may be shorter or longer than the header
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| AuditError::unavailable(&name, e))?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            name,
            reader,
            headers,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Designated columns that the header row does not contain.
    pub fn missing_columns<'a>(&self, field_spec: &'a FieldSpec) -> Vec<&'a str> {
        [field_spec.identifier.as_str(), field_spec.link.as_str()]
            .into_iter()
            .filter(|column| !self.headers.iter().any(|h| h == column))
            .collect()
    }

    /// Lazily yields records keyed by header name.
    ///
    /// Cells past the end of the header are dropped and a short row simply
    /// lacks its trailing fields. With repeated header names the rightmost
    /// column wins.
    pub fn records(&mut self) -> impl Iterator<Item = Result<Record, AuditError>> + '_ {
        let headers = &self.headers;
        let name = &self.name;

        self.reader.records().map(move |row| {
            let row = row.map_err(|e| AuditError::unavailable(name, e))?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .map(|(header, value)| (header.as_str(), value))
                .collect())
        })
    }
}

/// Runs [`audit`] over every record of `source`.
///
/// Reading stops at the first row that cannot be decoded and that error is
/// returned instead of a partial result.
pub fn audit_source<R: Read>(
    source: &mut CsvSource<R>,
    field_spec: &FieldSpec,
) -> Result<AuditResult, AuditError> {
    let mut failure = None;

    let records = source.records().map_while(|row| match row {
        Ok(record) => Some(record),
        Err(e) => {
            failure = Some(e);
            None
        }
    });
    let result = audit(records, field_spec);

    match failure {
        Some(e) => Err(e),
        None => Ok(result),
    }
}
