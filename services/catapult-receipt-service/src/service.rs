use catapult_core_types::{
    Address, Hash256, IdentifierCoordinate, MerkleProofInfo, MosaicId, Statement,
    UnresolvedAddress, UnresolvedMosaicId, VerificationResult,
};
use catapult_decoder::{decode_merkle_proof, StatementDecoder};
use catapult_proofs::{HashAlgorithm, MerkleProofVerifier};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::ServiceResult;
use crate::repository::ReceiptRepository;

/// Receipt lookups on top of a [`ReceiptRepository`]
pub struct ReceiptService<R> {
    repository: Arc<R>,
    decoder: StatementDecoder,
    verifier: MerkleProofVerifier<HashAlgorithm>,
}

impl<R: ReceiptRepository> ReceiptService<R> {
    pub fn new(repository: Arc<R>, config: &Config) -> Self {
        info!(
            "Receipt service configured for {:?} with {:?} receipt trees",
            config.network.network_type, config.proofs.hash_algorithm
        );
        Self {
            repository,
            decoder: StatementDecoder::new(config.network.network_type),
            verifier: MerkleProofVerifier::with_hasher(config.proofs.hash_algorithm),
        }
    }

    /// Build a service from the TOML config at `path`, writing defaults when it is missing
    pub fn from_config_file<P: AsRef<Path>>(repository: Arc<R>, path: P) -> ServiceResult<Self> {
        let config = Config::load(path)?;
        Ok(Self::new(repository, &config))
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Fetch and decode the statement recorded by the block at `height`
    pub async fn block_statement(&self, height: u64) -> ServiceResult<Statement> {
        let payload = self.repository.get_block_receipts(height).await?;
        let statement = self.decoder.decode(&payload)?;
        debug!(
            "Loaded statement for block {} with {} transaction statements",
            height,
            statement.transaction_statements().len()
        );
        Ok(statement)
    }

    /// Fetch and decode the Merkle path of statement `hash` in block `height`
    pub async fn merkle_proof(&self, height: u64, hash: &Hash256) -> ServiceResult<MerkleProofInfo> {
        let payload = self.repository.get_merkle_receipts(height, hash).await?;
        Ok(decode_merkle_proof(&payload)?)
    }

    /// Check that statement `hash` is committed to by `receipts_root`
    ///
    /// Returns `Ok(false)` when the fetched path does not fold to the root.
    /// Fetch and decode failures are errors.
    pub async fn verify_receipt_inclusion(
        &self,
        height: u64,
        hash: &Hash256,
        receipts_root: &Hash256,
    ) -> ServiceResult<bool> {
        let proof = self.merkle_proof(height, hash).await?;
        match self.verifier.verify_inclusion(hash, &proof, receipts_root) {
            VerificationResult::Valid => {
                debug!(
                    "Statement {} included in block {}",
                    hex::encode_upper(hash),
                    height
                );
                Ok(true)
            }
            VerificationResult::Invalid(reason) => {
                warn!(
                    "Statement {} not included in block {}: {}",
                    hex::encode_upper(hash),
                    height,
                    reason
                );
                Ok(false)
            }
        }
    }

    /// Resolve an address used by the transaction at `at` in block `height`
    ///
    /// Concrete addresses are returned without fetching anything.
    pub async fn resolve_address(
        &self,
        height: u64,
        unresolved: &UnresolvedAddress,
        at: IdentifierCoordinate,
    ) -> ServiceResult<Option<Address>> {
        if let UnresolvedAddress::Address(address) = unresolved {
            return Ok(Some(*address));
        }
        let statement = self.block_statement(height).await?;
        Ok(statement.resolve_address(height, unresolved, at))
    }

    pub async fn resolve_mosaic_id(
        &self,
        height: u64,
        unresolved: &UnresolvedMosaicId,
        at: IdentifierCoordinate,
    ) -> ServiceResult<Option<MosaicId>> {
        if let UnresolvedMosaicId::Mosaic(mosaic_id) = unresolved {
            return Ok(Some(*mosaic_id));
        }
        let statement = self.block_statement(height).await?;
        Ok(statement.resolve_mosaic_id(height, unresolved, at))
    }
}
