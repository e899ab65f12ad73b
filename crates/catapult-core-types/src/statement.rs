use crate::coordinate::IdentifierCoordinate;
use crate::id::{
    Address, MosaicId, ResolvedIdentifier, UnresolvedAddress, UnresolvedIdentifier,
    UnresolvedMosaicId,
};
use crate::receipts::Receipt;
use crate::resolution::{AddressResolutionStatement, MosaicResolutionStatement};
use serde::Serialize;

/// Receipts produced by one transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionStatement {
    pub height: u64,
    pub source: IdentifierCoordinate,
    pub receipts: Vec<Receipt>,
}

impl TransactionStatement {
    pub fn new(height: u64, source: IdentifierCoordinate, receipts: Vec<Receipt>) -> Self {
        Self {
            height,
            source,
            receipts,
        }
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }
}

/// Everything a block recorded about its execution
///
/// Resolution statements are not sorted across the collection, only within each
/// statement, so lookups here scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statement {
    transaction_statements: Vec<TransactionStatement>,
    address_resolution_statements: Vec<AddressResolutionStatement>,
    mosaic_resolution_statements: Vec<MosaicResolutionStatement>,
}

impl Statement {
    pub fn new(
        transaction_statements: Vec<TransactionStatement>,
        address_resolution_statements: Vec<AddressResolutionStatement>,
        mosaic_resolution_statements: Vec<MosaicResolutionStatement>,
    ) -> Self {
        Self {
            transaction_statements,
            address_resolution_statements,
            mosaic_resolution_statements,
        }
    }

    pub fn transaction_statements(&self) -> &[TransactionStatement] {
        &self.transaction_statements
    }

    pub fn address_resolution_statements(&self) -> &[AddressResolutionStatement] {
        &self.address_resolution_statements
    }

    pub fn mosaic_resolution_statements(&self) -> &[MosaicResolutionStatement] {
        &self.mosaic_resolution_statements
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_statements.is_empty()
            && self.address_resolution_statements.is_empty()
            && self.mosaic_resolution_statements.is_empty()
    }

    /// Find the receipts produced by the transaction at `source`
    pub fn transaction_statement(
        &self,
        height: u64,
        source: IdentifierCoordinate,
    ) -> Option<&TransactionStatement> {
        self.transaction_statements
            .iter()
            .find(|statement| statement.height == height && statement.source == source)
    }

    pub fn address_resolution(
        &self,
        height: u64,
        unresolved: &UnresolvedAddress,
    ) -> Option<&AddressResolutionStatement> {
        self.address_resolution_statements
            .iter()
            .find(|statement| statement.height() == height && statement.unresolved() == unresolved)
    }

    pub fn mosaic_resolution(
        &self,
        height: u64,
        unresolved: &UnresolvedMosaicId,
    ) -> Option<&MosaicResolutionStatement> {
        self.mosaic_resolution_statements
            .iter()
            .find(|statement| statement.height() == height && statement.unresolved() == unresolved)
    }

    /// Resolve an address referenced by the transaction at `at`
    ///
    /// Concrete addresses resolve to themselves. Aliases without a matching
    /// statement, or with no change recorded at or before `at`, stay unresolved.
    pub fn resolve_address(
        &self,
        height: u64,
        unresolved: &UnresolvedAddress,
        at: IdentifierCoordinate,
    ) -> Option<Address> {
        match unresolved {
            UnresolvedAddress::Address(address) => Some(*address),
            UnresolvedAddress::Alias(_) => self
                .address_resolution(height, unresolved)?
                .resolve_at(at)
                .copied(),
        }
    }

    pub fn resolve_mosaic_id(
        &self,
        height: u64,
        unresolved: &UnresolvedMosaicId,
        at: IdentifierCoordinate,
    ) -> Option<MosaicId> {
        match unresolved {
            UnresolvedMosaicId::Mosaic(mosaic_id) => Some(*mosaic_id),
            UnresolvedMosaicId::Alias(_) => self
                .mosaic_resolution(height, unresolved)?
                .resolve_at(at)
                .copied(),
        }
    }

    pub fn resolve(
        &self,
        height: u64,
        unresolved: &UnresolvedIdentifier,
        at: IdentifierCoordinate,
    ) -> Option<ResolvedIdentifier> {
        match unresolved {
            UnresolvedIdentifier::Address(address) => self
                .resolve_address(height, address, at)
                .map(ResolvedIdentifier::Address),
            UnresolvedIdentifier::Mosaic(mosaic_id) => self
                .resolve_mosaic_id(height, mosaic_id, at)
                .map(ResolvedIdentifier::Mosaic),
        }
    }
}
