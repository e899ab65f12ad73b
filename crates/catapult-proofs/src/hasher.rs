use catapult_core_types::Hash256;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::{Digest, Sha3_256};

/// Hash function a block uses to combine two Merkle nodes
pub trait MerkleHasher: Send + Sync {
    /// Hash the 64-byte concatenation `left || right`
    fn hash_pair(&self, left: &Hash256, right: &Hash256) -> Hash256;
}

fn digest_pair<D: Digest>(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut hasher = D::new();
    hasher.update(left);
    hasher.update(right);

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// SHA3-256, the hash Catapult blocks build their receipt trees with
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_256Hasher;

impl MerkleHasher for Sha3_256Hasher {
    fn hash_pair(&self, left: &Hash256, right: &Hash256) -> Hash256 {
        digest_pair::<Sha3_256>(left, right)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn hash_pair(&self, left: &Hash256, right: &Hash256) -> Hash256 {
        digest_pair::<Sha256>(left, right)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    fn hash_pair(&self, left: &Hash256, right: &Hash256) -> Hash256 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(left);
        hasher.update(right);
        *hasher.finalize().as_bytes()
    }
}

/// Hash function selected at runtime, e.g. from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    #[default]
    Sha3_256,
    Sha256,
    Blake3,
}

impl MerkleHasher for HashAlgorithm {
    fn hash_pair(&self, left: &Hash256, right: &Hash256) -> Hash256 {
        match self {
            HashAlgorithm::Sha3_256 => Sha3_256Hasher.hash_pair(left, right),
            HashAlgorithm::Sha256 => Sha256Hasher.hash_pair(left, right),
            HashAlgorithm::Blake3 => Blake3Hasher.hash_pair(left, right),
        }
    }
}

impl<H: MerkleHasher + ?Sized> MerkleHasher for &H {
    fn hash_pair(&self, left: &Hash256, right: &Hash256) -> Hash256 {
        (**self).hash_pair(left, right)
    }
}
