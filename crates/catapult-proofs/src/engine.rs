//! Merkle audit path verification
//!
//! The verifier folds a path of sibling hashes onto a leaf hash:
//! 1. Start from the leaf
//! 2. For each sibling, hash `sibling || running` when it sits on the left and
//!    `running || sibling` when it sits on the right
//! 3. The final running hash is the candidate root

use catapult_core_types::{Hash256, MerklePosition, MerkleProofInfo, VerificationResult};
use log::debug;

use crate::hasher::{MerkleHasher, Sha3_256Hasher};

/// Verifier for receipt inclusion proofs, SHA3-256 unless told otherwise
#[derive(Debug, Clone, Default)]
pub struct MerkleProofVerifier<H = Sha3_256Hasher> {
    hasher: H,
}

impl MerkleProofVerifier {
    /// Create a verifier using the Catapult block hash
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: MerkleHasher> MerkleProofVerifier<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Fold `proof` onto `leaf` and return the resulting root
    pub fn compute_root(&self, leaf: &Hash256, proof: &MerkleProofInfo) -> Hash256 {
        proof
            .items()
            .iter()
            .fold(*leaf, |current, item| match item.position {
                MerklePosition::Left => self.hasher.hash_pair(&item.hash, &current),
                MerklePosition::Right => self.hasher.hash_pair(&current, &item.hash),
            })
    }

    /// Check that `proof` links `leaf` to `expected_root`
    ///
    /// A mismatch is a normal negative answer, not an error.
    pub fn verify(&self, leaf: &Hash256, proof: &MerkleProofInfo, expected_root: &Hash256) -> bool {
        self.compute_root(leaf, proof) == *expected_root
    }

    /// Same check as [`verify`](Self::verify), with a reason on failure
    pub fn verify_inclusion(
        &self,
        leaf: &Hash256,
        proof: &MerkleProofInfo,
        expected_root: &Hash256,
    ) -> VerificationResult {
        let computed_root = self.compute_root(leaf, proof);
        if computed_root == *expected_root {
            return VerificationResult::Valid;
        }

        debug!(
            "Merkle path of {} items from leaf {} folded to {}, expected {}",
            proof.len(),
            hex::encode_upper(leaf),
            hex::encode_upper(computed_root),
            hex::encode_upper(expected_root)
        );
        VerificationResult::Invalid(format!(
            "computed root {} does not match expected root {}",
            hex::encode_upper(computed_root),
            hex::encode_upper(expected_root)
        ))
    }
}
