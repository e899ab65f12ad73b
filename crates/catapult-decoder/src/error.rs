use catapult_core_types::{IdentifierError, ResolutionError};
use thiserror::Error;

/// Failure to turn a raw payload into typed values
///
/// `record` is the JSON path of the offending record, for example
/// `mosaicResolutionStatements[2]` or `transactionStatements[0].receipts[1]`.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field `{field}` in {record}")]
    MissingField { record: String, field: &'static str },

    #[error("Expected {expected} at {record}")]
    UnexpectedType {
        record: String,
        expected: &'static str,
    },

    #[error("Malformed record {record}: {source}")]
    Record {
        record: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid field `{field}` in {record}: {source}")]
    InvalidField {
        record: String,
        field: &'static str,
        #[source]
        source: IdentifierError,
    },

    #[error("Integrity violation in {record}: {source}")]
    Integrity {
        record: String,
        #[source]
        source: ResolutionError,
    },
}

impl DecodeError {
    pub fn missing_field(record: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            record: record.into(),
            field,
        }
    }

    pub fn record(record: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Record {
            record: record.into(),
            source,
        }
    }

    pub fn invalid_field(
        record: impl Into<String>,
        field: &'static str,
        source: IdentifierError,
    ) -> Self {
        Self::InvalidField {
            record: record.into(),
            field,
            source,
        }
    }

    /// Path of the record the failure was found in, if any
    pub fn record_path(&self) -> Option<&str> {
        match self {
            DecodeError::Json(_) => None,
            DecodeError::MissingField { record, .. }
            | DecodeError::UnexpectedType { record, .. }
            | DecodeError::Record { record, .. }
            | DecodeError::InvalidField { record, .. }
            | DecodeError::Integrity { record, .. } => Some(record),
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Attach the field name and record path to an identifier parse result
pub(crate) fn parse_field<T>(
    record: &str,
    field: &'static str,
    parsed: Result<T, IdentifierError>,
) -> DecodeResult<T> {
    parsed.map_err(|source| DecodeError::invalid_field(record, field, source))
}
