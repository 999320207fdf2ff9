use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// File missing, unreadable, or not valid UTF-8.
    #[error("cannot read source '{source_name}': {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("invalid config file '{path}': {reason}")]
    Config { path: String, reason: String },
}

impl AuditError {
    pub(crate) fn unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        AuditError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
