use crate::id::{Address, MosaicId, NamespaceId, PublicAccount};
use serde::{Deserialize, Serialize};

/// Receipt type tags emitted by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ReceiptType {
    MosaicLevy = 0x1243,
    MosaicRentalFee = 0x124D,
    NamespaceRentalFee = 0x134E,
    HarvestFee = 0x2143,
    LockHashCompleted = 0x2248,
    LockHashExpired = 0x2348,
    LockSecretCompleted = 0x2252,
    LockSecretExpired = 0x2352,
    LockHashCreated = 0x3148,
    LockSecretCreated = 0x3152,
    MosaicExpired = 0x414D,
    NamespaceExpired = 0x414E,
    NamespaceDeleted = 0x424E,
    Inflation = 0x5143,
    TransactionGroup = 0xE143,
    AddressAliasResolution = 0xF143,
    MosaicAliasResolution = 0xF243,
}

/// Shape of the receipt body that goes with a type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptBodyKind {
    BalanceChange,
    BalanceTransfer,
    MosaicExpiry,
    NamespaceExpiry,
    Inflation,
    /// Tags that are known but carry no typed body here
    Untyped,
}

impl ReceiptType {
    pub fn from_u16(tag: u16) -> Option<Self> {
        use ReceiptType::*;
        let receipt_type = match tag {
            0x1243 => MosaicLevy,
            0x124D => MosaicRentalFee,
            0x134E => NamespaceRentalFee,
            0x2143 => HarvestFee,
            0x2248 => LockHashCompleted,
            0x2348 => LockHashExpired,
            0x2252 => LockSecretCompleted,
            0x2352 => LockSecretExpired,
            0x3148 => LockHashCreated,
            0x3152 => LockSecretCreated,
            0x414D => MosaicExpired,
            0x414E => NamespaceExpired,
            0x424E => NamespaceDeleted,
            0x5143 => Inflation,
            0xE143 => TransactionGroup,
            0xF143 => AddressAliasResolution,
            0xF243 => MosaicAliasResolution,
            _ => return None,
        };
        Some(receipt_type)
    }

    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn body_kind(self) -> ReceiptBodyKind {
        use ReceiptType::*;
        match self {
            HarvestFee | LockHashCreated | LockHashCompleted | LockHashExpired
            | LockSecretCreated | LockSecretCompleted | LockSecretExpired => {
                ReceiptBodyKind::BalanceChange
            }
            MosaicLevy | MosaicRentalFee | NamespaceRentalFee => ReceiptBodyKind::BalanceTransfer,
            MosaicExpired => ReceiptBodyKind::MosaicExpiry,
            NamespaceExpired | NamespaceDeleted => ReceiptBodyKind::NamespaceExpiry,
            Inflation => ReceiptBodyKind::Inflation,
            TransactionGroup | AddressAliasResolution | MosaicAliasResolution => {
                ReceiptBodyKind::Untyped
            }
        }
    }
}

impl TryFrom<u16> for ReceiptType {
    type Error = u16;

    fn try_from(tag: u16) -> Result<Self, Self::Error> {
        ReceiptType::from_u16(tag).ok_or(tag)
    }
}

/// Balance credited to or debited from a single account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChangeReceipt {
    pub receipt_type: ReceiptType,
    pub version: u8,
    pub target: PublicAccount,
    pub mosaic_id: MosaicId,
    pub amount: u64,
}

/// Balance moved from one account to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTransferReceipt {
    pub receipt_type: ReceiptType,
    pub version: u8,
    pub sender: PublicAccount,
    pub recipient: Address,
    pub mosaic_id: MosaicId,
    pub amount: u64,
}

/// Identifier of an expired artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactId {
    Mosaic(MosaicId),
    Namespace(NamespaceId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactExpiryReceipt {
    pub receipt_type: ReceiptType,
    pub version: u8,
    pub artifact_id: ArtifactId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationReceipt {
    pub version: u8,
    pub mosaic_id: MosaicId,
    pub amount: u64,
}

/// Receipt kept in its wire form because no typed model applies to its tag
///
/// `version` is absent when the server omitted it for a tag we cannot interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueReceipt {
    pub type_tag: u16,
    pub version: Option<u8>,
    pub payload: serde_json::Value,
}

/// A receipt attached to a transaction statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Receipt {
    BalanceChange(BalanceChangeReceipt),
    BalanceTransfer(BalanceTransferReceipt),
    ArtifactExpiry(ArtifactExpiryReceipt),
    Inflation(InflationReceipt),
    Opaque(OpaqueReceipt),
}

impl Receipt {
    /// Raw type tag, also available for opaque receipts
    pub fn type_tag(&self) -> u16 {
        match self {
            Receipt::BalanceChange(receipt) => receipt.receipt_type.as_u16(),
            Receipt::BalanceTransfer(receipt) => receipt.receipt_type.as_u16(),
            Receipt::ArtifactExpiry(receipt) => receipt.receipt_type.as_u16(),
            Receipt::Inflation(_) => ReceiptType::Inflation.as_u16(),
            Receipt::Opaque(receipt) => receipt.type_tag,
        }
    }

    pub fn receipt_type(&self) -> Option<ReceiptType> {
        ReceiptType::from_u16(self.type_tag())
    }

    pub fn version(&self) -> Option<u8> {
        match self {
            Receipt::BalanceChange(receipt) => Some(receipt.version),
            Receipt::BalanceTransfer(receipt) => Some(receipt.version),
            Receipt::ArtifactExpiry(receipt) => Some(receipt.version),
            Receipt::Inflation(receipt) => Some(receipt.version),
            Receipt::Opaque(receipt) => receipt.version,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Receipt::Opaque(_))
    }
}
