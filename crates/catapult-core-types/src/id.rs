use crate::error::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of a decoded address in bytes
pub const ADDRESS_SIZE: usize = 25;

/// Size of a public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Most significant bit of a 64-bit id, set on every namespace id
const NAMESPACE_FLAG: u64 = 1 << 63;

/// Low bit of the leading address byte, set when the address encodes a namespace alias
const ALIAS_ADDRESS_FLAG: u8 = 0x01;

/// Decode a hex string into a fixed-size byte array
pub(crate) fn decode_fixed<const N: usize>(encoded: &str) -> Result<[u8; N], IdentifierError> {
    let bytes = hex::decode(encoded)?;
    if bytes.len() != N {
        return Err(IdentifierError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }

    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Network a key or address belongs to, identified by the leading address byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NetworkType {
    MainNet = 0x68,
    TestNet = 0x98,
    Mijin = 0x60,
    MijinTest = 0x90,
}

impl NetworkType {
    pub fn from_byte(byte: u8) -> Result<Self, IdentifierError> {
        match byte {
            0x68 => Ok(NetworkType::MainNet),
            0x98 => Ok(NetworkType::TestNet),
            0x60 => Ok(NetworkType::Mijin),
            0x90 => Ok(NetworkType::MijinTest),
            other => Err(IdentifierError::UnknownNetworkType(other)),
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl Default for NetworkType {
    fn default() -> Self {
        NetworkType::MainNet
    }
}

/// Decoded account address (network byte, key hash and checksum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(encoded: &str) -> Result<Self, IdentifierError> {
        decode_fixed(encoded).map(Self)
    }

    pub fn bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Network encoded in the leading byte
    pub fn network_type(&self) -> Result<NetworkType, IdentifierError> {
        NetworkType::from_byte(self.0[0])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 64-bit mosaic identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MosaicId(u64);

impl MosaicId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse a 16-character big-endian hex id
    pub fn from_hex(encoded: &str) -> Result<Self, IdentifierError> {
        decode_fixed::<8>(encoded).map(|bytes| Self(u64::from_be_bytes(bytes)))
    }

    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn to_hex(&self) -> String {
        format!("{:016X}", self.0)
    }
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 64-bit namespace identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamespaceId(u64);

impl NamespaceId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn from_hex(encoded: &str) -> Result<Self, IdentifierError> {
        decode_fixed::<8>(encoded).map(|bytes| Self(u64::from_be_bytes(bytes)))
    }

    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn to_hex(&self) -> String {
        format!("{:016X}", self.0)
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Account public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    pub const fn new(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(encoded: &str) -> Result<Self, IdentifierError> {
        decode_fixed(encoded).map(Self)
    }

    pub fn bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Public key bound to the network it was observed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicAccount {
    pub public_key: PublicKey,
    pub network_type: NetworkType,
}

impl PublicAccount {
    pub fn new(public_key: PublicKey, network_type: NetworkType) -> Self {
        Self {
            public_key,
            network_type,
        }
    }
}

/// Address as referenced by a transaction: either concrete or a namespace alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnresolvedAddress {
    Address(Address),
    Alias(NamespaceId),
}

impl UnresolvedAddress {
    /// Parse the 25-byte wire form
    ///
    /// When the low bit of the first byte is set the value is an alias and bytes
    /// 1..9 carry the namespace id in little-endian order.
    pub fn from_hex(encoded: &str) -> Result<Self, IdentifierError> {
        let bytes: [u8; ADDRESS_SIZE] = decode_fixed(encoded)?;
        if bytes[0] & ALIAS_ADDRESS_FLAG == ALIAS_ADDRESS_FLAG {
            let mut id = [0u8; 8];
            id.copy_from_slice(&bytes[1..9]);
            Ok(UnresolvedAddress::Alias(NamespaceId::new(u64::from_le_bytes(id))))
        } else {
            Ok(UnresolvedAddress::Address(Address::new(bytes)))
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, UnresolvedAddress::Alias(_))
    }
}

impl From<Address> for UnresolvedAddress {
    fn from(address: Address) -> Self {
        UnresolvedAddress::Address(address)
    }
}

impl From<NamespaceId> for UnresolvedAddress {
    fn from(namespace_id: NamespaceId) -> Self {
        UnresolvedAddress::Alias(namespace_id)
    }
}

impl fmt::Display for UnresolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedAddress::Address(address) => write!(f, "{}", address),
            UnresolvedAddress::Alias(namespace_id) => write!(f, "alias:{}", namespace_id),
        }
    }
}

/// Mosaic as referenced by a transaction: either concrete or a namespace alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnresolvedMosaicId {
    Mosaic(MosaicId),
    Alias(NamespaceId),
}

impl UnresolvedMosaicId {
    /// Namespace ids always carry the high bit, mosaic ids never do
    pub fn from_id(id: u64) -> Self {
        if id & NAMESPACE_FLAG == NAMESPACE_FLAG {
            UnresolvedMosaicId::Alias(NamespaceId::new(id))
        } else {
            UnresolvedMosaicId::Mosaic(MosaicId::new(id))
        }
    }

    pub fn from_hex(encoded: &str) -> Result<Self, IdentifierError> {
        decode_fixed::<8>(encoded).map(|bytes| Self::from_id(u64::from_be_bytes(bytes)))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, UnresolvedMosaicId::Alias(_))
    }
}

impl From<MosaicId> for UnresolvedMosaicId {
    fn from(mosaic_id: MosaicId) -> Self {
        UnresolvedMosaicId::Mosaic(mosaic_id)
    }
}

impl From<NamespaceId> for UnresolvedMosaicId {
    fn from(namespace_id: NamespaceId) -> Self {
        UnresolvedMosaicId::Alias(namespace_id)
    }
}

impl fmt::Display for UnresolvedMosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedMosaicId::Mosaic(mosaic_id) => write!(f, "{}", mosaic_id),
            UnresolvedMosaicId::Alias(namespace_id) => write!(f, "alias:{}", namespace_id),
        }
    }
}

/// Any unresolved identifier a transaction can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnresolvedIdentifier {
    Address(UnresolvedAddress),
    Mosaic(UnresolvedMosaicId),
}

impl From<UnresolvedAddress> for UnresolvedIdentifier {
    fn from(unresolved: UnresolvedAddress) -> Self {
        UnresolvedIdentifier::Address(unresolved)
    }
}

impl From<UnresolvedMosaicId> for UnresolvedIdentifier {
    fn from(unresolved: UnresolvedMosaicId) -> Self {
        UnresolvedIdentifier::Mosaic(unresolved)
    }
}

/// What an unresolved identifier resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedIdentifier {
    Address(Address),
    Mosaic(MosaicId),
}

impl ResolvedIdentifier {
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            ResolvedIdentifier::Address(address) => Some(address),
            ResolvedIdentifier::Mosaic(_) => None,
        }
    }

    pub fn as_mosaic_id(&self) -> Option<&MosaicId> {
        match self {
            ResolvedIdentifier::Mosaic(mosaic_id) => Some(mosaic_id),
            ResolvedIdentifier::Address(_) => None,
        }
    }
}

impl From<Address> for ResolvedIdentifier {
    fn from(address: Address) -> Self {
        ResolvedIdentifier::Address(address)
    }
}

impl From<MosaicId> for ResolvedIdentifier {
    fn from(mosaic_id: MosaicId) -> Self {
        ResolvedIdentifier::Mosaic(mosaic_id)
    }
}
