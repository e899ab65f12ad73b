//! Alias resolution logs recorded by a block
//!
//! A resolution statement lists the coordinates at which the target of one
//! alias changed while the block executed. The value in force at any other
//! coordinate is whatever the latest change at or before it set.

use crate::coordinate::IdentifierCoordinate;
use crate::error::ResolutionError;
use crate::id::{Address, MosaicId, UnresolvedAddress, UnresolvedMosaicId};
use serde::{Deserialize, Serialize};

/// One recorded resolution change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionEntry<R> {
    /// Coordinate of the transaction at which the resolution took effect
    pub source: IdentifierCoordinate,

    /// What the alias resolved to from `source` onwards
    pub resolved: R,
}

impl<R> ResolutionEntry<R> {
    pub fn new(source: IdentifierCoordinate, resolved: R) -> Self {
        Self { source, resolved }
    }
}

/// Resolution log for a single unresolved identifier at one block height
///
/// Entries are strictly ascending by `source`; the constructor rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionStatement<U, R> {
    height: u64,
    unresolved: U,
    entries: Vec<ResolutionEntry<R>>,
}

/// Resolution log of an address alias
pub type AddressResolutionStatement = ResolutionStatement<UnresolvedAddress, Address>;

/// Resolution log of a mosaic alias
pub type MosaicResolutionStatement = ResolutionStatement<UnresolvedMosaicId, MosaicId>;

impl<U, R> ResolutionStatement<U, R> {
    pub fn new(
        height: u64,
        unresolved: U,
        entries: Vec<ResolutionEntry<R>>,
    ) -> Result<Self, ResolutionError> {
        if let Some(index) = entries
            .windows(2)
            .position(|pair| pair[0].source >= pair[1].source)
        {
            return Err(ResolutionError::UnorderedEntries {
                index: index + 1,
                previous: entries[index].source,
                current: entries[index + 1].source,
            });
        }

        Ok(Self {
            height,
            unresolved,
            entries,
        })
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn unresolved(&self) -> &U {
        &self.unresolved
    }

    pub fn entries(&self) -> &[ResolutionEntry<R>] {
        &self.entries
    }

    /// Find the entry in force at `query`
    ///
    /// Returns the greatest entry whose source is at or before `query`, or `None`
    /// when the first recorded change comes after it.
    pub fn resolution_entry_at(&self, query: IdentifierCoordinate) -> Option<&ResolutionEntry<R>> {
        let index = self.entries.partition_point(|entry| entry.source <= query);
        index.checked_sub(1).map(|last| &self.entries[last])
    }

    /// Resolve the alias at `query`
    pub fn resolve_at(&self, query: IdentifierCoordinate) -> Option<&R> {
        self.resolution_entry_at(query).map(|entry| &entry.resolved)
    }
}
