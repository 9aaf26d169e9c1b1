use thiserror::Error;

/// Failures while reading the lifecycle table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data source '{origin}' is unreadable: {source}")]
    SourceUnreadable {
        origin: String,
        #[source]
        source: csv::Error,
    },
    #[error("data source '{origin}' is missing required column '{column}'")]
    MissingColumn {
        origin: String,
        column: &'static str,
    },
    /// Only raised under [`LoadPolicy::Strict`](crate::data::loader::LoadPolicy::Strict).
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

/// Outcome of a detail lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no phase with id '{phase_id}'")]
    NotFound { phase_id: String },
}
