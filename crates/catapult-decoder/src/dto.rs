//! Wire shapes of the statement and Merkle path payloads

use catapult_core_types::{IdentifierCoordinate, MerklePosition};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};

/// Top-level keys of a block statement payload
pub const TRANSACTION_STATEMENTS: &str = "transactionStatements";
pub const ADDRESS_RESOLUTION_STATEMENTS: &str = "addressResolutionStatements";
pub const MOSAIC_RESOLUTION_STATEMENTS: &str = "mosaicResolutionStatements";

/// Accept a `u64` written either as a decimal string or as a JSON number
pub fn u64_from_decimal<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid decimal `{}`: {}", text, e))),
    }
}

/// `{ "statement": { ... } }` wrapper around every statement record
#[derive(Debug, Deserialize)]
pub struct StatementEnvelope<T> {
    pub statement: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatementDto {
    #[serde(deserialize_with = "u64_from_decimal")]
    pub height: u64,
    pub source: IdentifierCoordinate,
    /// Kept raw so each receipt can be dispatched on its own type tag
    pub receipts: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionStatementDto {
    #[serde(deserialize_with = "u64_from_decimal")]
    pub height: u64,
    pub unresolved: String,
    pub resolution_entries: Vec<ResolutionEntryDto>,
}

#[derive(Debug, Deserialize)]
pub struct ResolutionEntryDto {
    pub source: IdentifierCoordinate,
    pub resolved: String,
}

/// Fields every receipt carries
///
/// `version` is only enforced once the tag maps to a typed receipt.
#[derive(Debug, Deserialize)]
pub struct ReceiptHeaderDto {
    #[serde(rename = "type")]
    pub receipt_type: u16,
    #[serde(default)]
    pub version: Option<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChangeReceiptDto {
    pub target_public_key: String,
    pub mosaic_id: String,
    #[serde(deserialize_with = "u64_from_decimal")]
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTransferReceiptDto {
    pub sender_public_key: String,
    pub recipient_address: String,
    pub mosaic_id: String,
    #[serde(deserialize_with = "u64_from_decimal")]
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactExpiryReceiptDto {
    pub artifact_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationReceiptDto {
    pub mosaic_id: String,
    #[serde(deserialize_with = "u64_from_decimal")]
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleProofInfoDto {
    pub merkle_path: Vec<MerklePathItemDto>,
}

#[derive(Debug, Deserialize)]
pub struct MerklePathItemDto {
    pub position: MerklePosition,
    pub hash: String,
}

/// Deserialize one record, tagging failures with its path
pub fn from_record<T: DeserializeOwned>(record: &str, raw: &Value) -> DecodeResult<T> {
    T::deserialize(raw).map_err(|source| DecodeError::record(record, source))
}

/// Fetch a required array field of the payload root
pub fn required_array<'a>(payload: &'a Value, key: &'static str) -> DecodeResult<&'a [Value]> {
    let field = payload
        .get(key)
        .ok_or_else(|| DecodeError::missing_field("statement payload", key))?;

    field
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| DecodeError::UnexpectedType {
            record: key.to_string(),
            expected: "an array",
        })
}
