//! Decoding of raw node payloads into typed statements and proofs
//!
//! Payloads arrive as JSON with a mix of encodings. Everything is converted
//! at this boundary:
//! - heights and amounts: decimal strings (plain JSON numbers are accepted too) into `u64`
//! - coordinates, receipt types and versions: JSON numbers
//! - mosaic, namespace and artifact ids: 16 hex characters, big-endian
//! - addresses: 50 hex characters, public keys and hashes: 64 hex characters

pub mod decoder;
pub mod dto;
pub mod error;
pub mod merkle;
pub mod receipt;

pub use decoder::{decode_statement, StatementDecoder};
pub use error::{DecodeError, DecodeResult};
pub use merkle::{decode_merkle_proof, decode_merkle_proof_slice};
