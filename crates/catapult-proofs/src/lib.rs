//! Merkle inclusion proofs for receipt statements
//!
//! A block header commits to its receipts through a Merkle root. Given the hash
//! of a statement and the audit path served by a node, the verifier here folds
//! the path back up to a root and compares it with the header's value.

pub mod engine;
pub mod hasher;
pub mod tree;

// Re-export main types for convenience
pub use engine::MerkleProofVerifier;
pub use hasher::{Blake3Hasher, HashAlgorithm, MerkleHasher, Sha256Hasher, Sha3_256Hasher};
pub use tree::MerkleTree;
