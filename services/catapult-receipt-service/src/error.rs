use catapult_decoder::DecodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("Statement not found at height {height}")]
    StatementNotFound { height: u64 },

    #[error("Merkle path not found for {hash} at height {height}")]
    ProofNotFound { height: u64, hash: String },

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    pub fn statement_not_found(height: u64) -> Self {
        Self::StatementNotFound { height }
    }

    pub fn proof_not_found(height: u64, hash: &[u8; 32]) -> Self {
        Self::ProofNotFound {
            height,
            hash: hex::encode_upper(hash),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
