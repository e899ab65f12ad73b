use crate::coordinate::IdentifierCoordinate;
use thiserror::Error;

/// Failure to parse an identifier, key or hash from its wire encoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdentifierError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Unknown network type: {0:#04x}")]
    UnknownNetworkType(u8),
}

/// Integrity violations detected while building a resolution statement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("Resolution entry {index} at {current} does not follow {previous}")]
    UnorderedEntries {
        index: usize,
        previous: IdentifierCoordinate,
        current: IdentifierCoordinate,
    },
}
