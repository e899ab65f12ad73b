use crate::error::IdentifierError;
use crate::id::decode_fixed;
use serde::{Deserialize, Serialize};

/// 32-byte hash used for leaves, siblings and roots
pub type Hash256 = [u8; 32];

/// Parse a 64-character hex hash
pub fn hash_from_hex(encoded: &str) -> Result<Hash256, IdentifierError> {
    decode_fixed(encoded)
}

/// Side of the running node a sibling hash sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerklePosition {
    Left,
    Right,
}

/// Sibling hash on a Merkle audit path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerklePathItem {
    pub position: MerklePosition,
    pub hash: Hash256,
}

impl MerklePathItem {
    pub fn new(position: MerklePosition, hash: Hash256) -> Self {
        Self { position, hash }
    }
}

/// Audit path from a leaf up to the root
///
/// Items are ordered leaf first and must be folded in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProofInfo {
    pub merkle_path: Vec<MerklePathItem>,
}

impl MerkleProofInfo {
    pub fn new(merkle_path: Vec<MerklePathItem>) -> Self {
        Self { merkle_path }
    }

    pub fn items(&self) -> &[MerklePathItem] {
        &self.merkle_path
    }

    pub fn len(&self) -> usize {
        self.merkle_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merkle_path.is_empty()
    }
}

/// Outcome of an inclusion check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// The proof folds to the expected root
    Valid,

    /// The proof does not check out for the specified reason
    Invalid(String),
}

impl VerificationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid)
    }
}
