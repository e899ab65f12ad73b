use catapult_core_types::{Hash256, MerklePathItem, MerklePosition, MerkleProofInfo};

use crate::hasher::MerkleHasher;

/// Merkle tree over statement hashes, built the way blocks build their receipts root
///
/// Nodes are hashed pairwise; a level with an odd number of nodes pairs its last
/// node with itself. The root of an empty tree is all zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// `levels[0]` holds the leaves, the last level holds the root
    levels: Vec<Vec<Hash256>>,
}

impl MerkleTree {
    pub fn build<H: MerkleHasher>(leaves: &[Hash256], hasher: &H) -> Self {
        let mut levels = vec![leaves.to_vec()];

        loop {
            let current = &levels[levels.len() - 1];
            if current.len() <= 1 {
                break;
            }

            let next: Vec<Hash256> = current
                .chunks(2)
                .map(|pair| {
                    // Duplicate if odd number
                    let right = pair.get(1).unwrap_or(&pair[0]);
                    hasher.hash_pair(&pair[0], right)
                })
                .collect();
            levels.push(next);
        }

        Self { levels }
    }

    pub fn root(&self) -> Hash256 {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or([0u8; 32])
    }

    pub fn leaves(&self) -> &[Hash256] {
        &self.levels[0]
    }

    /// Audit path for the leaf at `index`, ordered leaf to root
    pub fn path(&self, index: usize) -> Option<MerkleProofInfo> {
        if index >= self.leaves().len() {
            return None;
        }

        let mut position = index;
        let mut path = Vec::with_capacity(self.levels.len() - 1);
        for level in &self.levels[..self.levels.len() - 1] {
            let item = if position % 2 == 0 {
                let sibling = level.get(position + 1).unwrap_or(&level[position]);
                MerklePathItem::new(MerklePosition::Right, *sibling)
            } else {
                MerklePathItem::new(MerklePosition::Left, level[position - 1])
            };
            path.push(item);
            position /= 2;
        }

        Some(MerkleProofInfo::new(path))
    }
}
