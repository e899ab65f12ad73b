use async_trait::async_trait;
use catapult_core_types::Hash256;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{ServiceError, ServiceResult};

/// Source of raw receipt payloads, typically a node's REST endpoints
///
/// Implementations hand back the JSON body unchanged; decoding happens in the
/// service so every source is held to the same wire rules.
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Statement payload recorded by the block at `height`
    async fn get_block_receipts(&self, height: u64) -> ServiceResult<Value>;

    /// Merkle path payload linking statement `hash` to the receipts root of block `height`
    async fn get_merkle_receipts(&self, height: u64, hash: &Hash256) -> ServiceResult<Value>;
}

/// Repository backed by maps, used for tests and offline replays
#[derive(Debug, Default)]
pub struct InMemoryReceiptRepository {
    statements: RwLock<HashMap<u64, Value>>,
    merkle_paths: RwLock<HashMap<(u64, Hash256), Value>>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_block_receipts(&self, height: u64, payload: Value) {
        self.statements.write().await.insert(height, payload);
    }

    pub async fn insert_merkle_receipts(&self, height: u64, hash: Hash256, payload: Value) {
        self.merkle_paths.write().await.insert((height, hash), payload);
    }
}

#[async_trait]
impl ReceiptRepository for InMemoryReceiptRepository {
    async fn get_block_receipts(&self, height: u64) -> ServiceResult<Value> {
        self.statements
            .read()
            .await
            .get(&height)
            .cloned()
            .ok_or_else(|| ServiceError::statement_not_found(height))
    }

    async fn get_merkle_receipts(&self, height: u64, hash: &Hash256) -> ServiceResult<Value> {
        self.merkle_paths
            .read()
            .await
            .get(&(height, *hash))
            .cloned()
            .ok_or_else(|| ServiceError::proof_not_found(height, hash))
    }
}
