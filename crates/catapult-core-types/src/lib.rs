pub mod coordinate;
pub mod error;
pub mod id;
pub mod merkle;
pub mod receipts;
pub mod resolution;
pub mod statement;

// Re-export the main types for convenience
pub use coordinate::IdentifierCoordinate;
pub use error::{IdentifierError, ResolutionError};
pub use id::{
    Address,
    MosaicId,
    NamespaceId,
    NetworkType,
    PublicAccount,
    PublicKey,
    ResolvedIdentifier,
    UnresolvedAddress,
    UnresolvedIdentifier,
    UnresolvedMosaicId,
};

// Re-export resolution types
pub use resolution::{
    AddressResolutionStatement,
    MosaicResolutionStatement,
    ResolutionEntry,
    ResolutionStatement,
};

// Re-export receipt types
pub use receipts::{
    ArtifactExpiryReceipt,
    ArtifactId,
    BalanceChangeReceipt,
    BalanceTransferReceipt,
    InflationReceipt,
    OpaqueReceipt,
    Receipt,
    ReceiptBodyKind,
    ReceiptType,
};

pub use statement::{Statement, TransactionStatement};

// Re-export merkle proof types
pub use merkle::{
    hash_from_hex,
    Hash256,
    MerklePathItem,
    MerklePosition,
    MerkleProofInfo,
    VerificationResult,
};
