use catapult_core_types::{
    Address, AddressResolutionStatement, IdentifierError, MosaicId, MosaicResolutionStatement,
    NetworkType, ResolutionEntry, ResolutionStatement, Statement, TransactionStatement,
    UnresolvedAddress, UnresolvedMosaicId,
};
use log::debug;
use serde_json::Value;

use crate::dto::{
    from_record, required_array, ResolutionStatementDto, StatementEnvelope,
    TransactionStatementDto, ADDRESS_RESOLUTION_STATEMENTS, MOSAIC_RESOLUTION_STATEMENTS,
    TRANSACTION_STATEMENTS,
};
use crate::error::{parse_field, DecodeError, DecodeResult};
use crate::receipt::decode_receipt;

/// Builds [`Statement`]s from block statement payloads
///
/// Decoding is pure: the same payload and network always give the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementDecoder {
    network_type: NetworkType,
}

impl StatementDecoder {
    /// Create a decoder that binds receipt public keys to `network_type`
    pub fn new(network_type: NetworkType) -> Self {
        Self { network_type }
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn decode_slice(&self, payload: &[u8]) -> DecodeResult<Statement> {
        let payload: Value = serde_json::from_slice(payload)?;
        self.decode(&payload)
    }

    pub fn decode_str(&self, payload: &str) -> DecodeResult<Statement> {
        let payload: Value = serde_json::from_str(payload)?;
        self.decode(&payload)
    }

    /// Decode a whole block statement payload
    pub fn decode(&self, payload: &Value) -> DecodeResult<Statement> {
        let transaction_statements = required_array(payload, TRANSACTION_STATEMENTS)?
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                self.decode_transaction_statement(
                    &format!("{}[{}]", TRANSACTION_STATEMENTS, index),
                    raw,
                )
            })
            .collect::<DecodeResult<Vec<_>>>()?;

        let address_resolution_statements = required_array(payload, ADDRESS_RESOLUTION_STATEMENTS)?
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                self.decode_address_resolution(
                    &format!("{}[{}]", ADDRESS_RESOLUTION_STATEMENTS, index),
                    raw,
                )
            })
            .collect::<DecodeResult<Vec<_>>>()?;

        let mosaic_resolution_statements = required_array(payload, MOSAIC_RESOLUTION_STATEMENTS)?
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                self.decode_mosaic_resolution(
                    &format!("{}[{}]", MOSAIC_RESOLUTION_STATEMENTS, index),
                    raw,
                )
            })
            .collect::<DecodeResult<Vec<_>>>()?;

        debug!(
            "Decoded {} transaction, {} address resolution and {} mosaic resolution statements",
            transaction_statements.len(),
            address_resolution_statements.len(),
            mosaic_resolution_statements.len()
        );

        Ok(Statement::new(
            transaction_statements,
            address_resolution_statements,
            mosaic_resolution_statements,
        ))
    }

    fn decode_transaction_statement(
        &self,
        record: &str,
        raw: &Value,
    ) -> DecodeResult<TransactionStatement> {
        let envelope: StatementEnvelope<TransactionStatementDto> = from_record(record, raw)?;
        let dto = envelope.statement;

        let receipts = dto
            .receipts
            .iter()
            .enumerate()
            .map(|(index, receipt)| {
                decode_receipt(
                    &format!("{}.receipts[{}]", record, index),
                    receipt,
                    self.network_type,
                )
            })
            .collect::<DecodeResult<Vec<_>>>()?;

        Ok(TransactionStatement::new(dto.height, dto.source, receipts))
    }

    fn decode_address_resolution(
        &self,
        record: &str,
        raw: &Value,
    ) -> DecodeResult<AddressResolutionStatement> {
        decode_resolution(record, raw, UnresolvedAddress::from_hex, Address::from_hex)
    }

    fn decode_mosaic_resolution(
        &self,
        record: &str,
        raw: &Value,
    ) -> DecodeResult<MosaicResolutionStatement> {
        decode_resolution(record, raw, UnresolvedMosaicId::from_hex, MosaicId::from_hex)
    }
}

/// Decode a resolution statement with the parsers matching its kind
///
/// The resolved parser is chosen once for the statement and applied to every
/// entry. Entry order is kept as received and must already be strictly ascending.
fn decode_resolution<U, R>(
    record: &str,
    raw: &Value,
    parse_unresolved: fn(&str) -> Result<U, IdentifierError>,
    parse_resolved: fn(&str) -> Result<R, IdentifierError>,
) -> DecodeResult<ResolutionStatement<U, R>> {
    let envelope: StatementEnvelope<ResolutionStatementDto> = from_record(record, raw)?;
    let dto = envelope.statement;

    let unresolved = parse_field(record, "unresolved", parse_unresolved(&dto.unresolved))?;
    let entries = dto
        .resolution_entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            parse_field(
                &format!("{}.resolutionEntries[{}]", record, index),
                "resolved",
                parse_resolved(&entry.resolved),
            )
            .map(|resolved| ResolutionEntry::new(entry.source, resolved))
        })
        .collect::<DecodeResult<Vec<_>>>()?;

    ResolutionStatement::new(dto.height, unresolved, entries).map_err(|source| {
        DecodeError::Integrity {
            record: record.to_string(),
            source,
        }
    })
}

/// Decode a block statement payload for `network_type`
pub fn decode_statement(payload: &Value, network_type: NetworkType) -> DecodeResult<Statement> {
    StatementDecoder::new(network_type).decode(payload)
}
