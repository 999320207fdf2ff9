use crate::audit::{AuditResult, FieldSpec};
use chrono::{DateTime, Utc};
use serde::ser::Serializer;
use serde::Serialize;

/// Root structure of the JSON report
#[derive(Debug, Serialize)]
pub struct AuditExport {
    pub tool_version: String,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub identifier_column: String,
    pub link_column: String,
    pub sources: Vec<SourceExport>,
    pub summary: CountsExport,
}

#[derive(Debug, Serialize)]
pub struct SourceExport {
    pub source: String,
    #[serde(flatten)]
    pub counts: CountsExport,
    pub missing_link_identifiers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountsExport {
    pub total: u64,
    pub with_identifier: u64,
    pub with_link: u64,
    pub with_both: u64,
    pub missing_link: u64,
}

impl From<&AuditResult> for CountsExport {
    fn from(result: &AuditResult) -> Self {
        Self {
            total: result.total,
            with_identifier: result.with_identifier,
            with_link: result.with_link,
            with_both: result.with_both,
            missing_link: result.missing_link_count(),
        }
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

impl AuditExport {
    pub fn new(field_spec: &FieldSpec, sources: &[(String, AuditResult)], summary: &AuditResult) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            identifier_column: field_spec.identifier.clone(),
            link_column: field_spec.link.clone(),
            sources: sources
                .iter()
                .map(|(name, result)| SourceExport {
                    source: name.clone(),
                    counts: result.into(),
                    missing_link_identifiers: result.missing_link_identifiers.clone(),
                })
                .collect(),
            summary: summary.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_export_shape() {
        let result = AuditResult {
            total: 4,
            with_identifier: 2,
            with_link: 2,
            with_both: 1,
            missing_link_identifiers: vec!["B".to_string()],
        };
        let sources = vec![("apr.csv".to_string(), result.clone())];
        let export = AuditExport::new(&FieldSpec::default(), &sources, &result);

        let value: Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
        assert_eq!(value["identifier_column"], "SKU");
        assert_eq!(value["link_column"], "Origin URL");
        assert_eq!(value["sources"][0]["source"], "apr.csv");
        assert_eq!(value["sources"][0]["total"], 4);
        assert_eq!(value["sources"][0]["missing_link"], 1);
        assert_eq!(value["sources"][0]["missing_link_identifiers"][0], "B");
        assert_eq!(value["summary"]["with_both"], 1);
        assert!(value["summary"].get("missing_link_identifiers").is_none());
        assert!(DateTime::parse_from_rfc3339(value["created_at"].as_str().unwrap()).is_ok());
    }
}
