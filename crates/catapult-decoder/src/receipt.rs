//! Receipt decoding, dispatched on the receipt type tag

use catapult_core_types::{
    Address, ArtifactExpiryReceipt, ArtifactId, BalanceChangeReceipt, BalanceTransferReceipt,
    InflationReceipt, MosaicId, NamespaceId, NetworkType, OpaqueReceipt, PublicAccount, PublicKey,
    Receipt, ReceiptBodyKind, ReceiptType,
};
use log::{debug, warn};
use serde_json::Value;

use crate::dto::{
    from_record, ArtifactExpiryReceiptDto, BalanceChangeReceiptDto, BalanceTransferReceiptDto,
    InflationReceiptDto, ReceiptHeaderDto,
};
use crate::error::{parse_field, DecodeError, DecodeResult};

fn public_account(
    record: &str,
    field: &'static str,
    encoded: &str,
    network_type: NetworkType,
) -> DecodeResult<PublicAccount> {
    let public_key = parse_field(record, field, PublicKey::from_hex(encoded))?;
    Ok(PublicAccount::new(public_key, network_type))
}

fn opaque(header: &ReceiptHeaderDto, raw: &Value) -> Receipt {
    Receipt::Opaque(OpaqueReceipt {
        type_tag: header.receipt_type,
        version: header.version,
        payload: raw.clone(),
    })
}

/// Decode a single receipt
///
/// Tags without a typed model, including tags this crate has never heard of,
/// come back as [`Receipt::Opaque`] so newer servers do not break decoding.
pub fn decode_receipt(record: &str, raw: &Value, network_type: NetworkType) -> DecodeResult<Receipt> {
    let header: ReceiptHeaderDto = from_record(record, raw)?;

    let receipt_type = match ReceiptType::from_u16(header.receipt_type) {
        Some(receipt_type) => receipt_type,
        None => {
            warn!(
                "Unknown receipt type {:#06x} at {}, keeping it opaque",
                header.receipt_type, record
            );
            return Ok(opaque(&header, raw));
        }
    };

    if receipt_type.body_kind() == ReceiptBodyKind::Untyped {
        debug!("Receipt {:?} at {} kept opaque", receipt_type, record);
        return Ok(opaque(&header, raw));
    }

    let version = header
        .version
        .ok_or_else(|| DecodeError::missing_field(record, "version"))?;

    let receipt = match receipt_type.body_kind() {
        ReceiptBodyKind::BalanceChange => {
            let dto: BalanceChangeReceiptDto = from_record(record, raw)?;
            Receipt::BalanceChange(BalanceChangeReceipt {
                receipt_type,
                version,
                target: public_account(
                    record,
                    "targetPublicKey",
                    &dto.target_public_key,
                    network_type,
                )?,
                mosaic_id: parse_field(record, "mosaicId", MosaicId::from_hex(&dto.mosaic_id))?,
                amount: dto.amount,
            })
        }
        ReceiptBodyKind::BalanceTransfer => {
            let dto: BalanceTransferReceiptDto = from_record(record, raw)?;
            Receipt::BalanceTransfer(BalanceTransferReceipt {
                receipt_type,
                version,
                sender: public_account(
                    record,
                    "senderPublicKey",
                    &dto.sender_public_key,
                    network_type,
                )?,
                recipient: parse_field(
                    record,
                    "recipientAddress",
                    Address::from_hex(&dto.recipient_address),
                )?,
                mosaic_id: parse_field(record, "mosaicId", MosaicId::from_hex(&dto.mosaic_id))?,
                amount: dto.amount,
            })
        }
        ReceiptBodyKind::MosaicExpiry => {
            let dto: ArtifactExpiryReceiptDto = from_record(record, raw)?;
            let mosaic_id = parse_field(record, "artifactId", MosaicId::from_hex(&dto.artifact_id))?;
            Receipt::ArtifactExpiry(ArtifactExpiryReceipt {
                receipt_type,
                version,
                artifact_id: ArtifactId::Mosaic(mosaic_id),
            })
        }
        ReceiptBodyKind::NamespaceExpiry => {
            let dto: ArtifactExpiryReceiptDto = from_record(record, raw)?;
            let namespace_id =
                parse_field(record, "artifactId", NamespaceId::from_hex(&dto.artifact_id))?;
            Receipt::ArtifactExpiry(ArtifactExpiryReceipt {
                receipt_type,
                version,
                artifact_id: ArtifactId::Namespace(namespace_id),
            })
        }
        ReceiptBodyKind::Inflation => {
            let dto: InflationReceiptDto = from_record(record, raw)?;
            Receipt::Inflation(InflationReceipt {
                version,
                mosaic_id: parse_field(record, "mosaicId", MosaicId::from_hex(&dto.mosaic_id))?,
                amount: dto.amount,
            })
        }
        ReceiptBodyKind::Untyped => opaque(&header, raw),
    };

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PUBLIC_KEY: &str = "B2708D49C46F8AB5CDBD7A09C959EEA12E4A782592F3D1D3D17D54622E655D7F";

    #[test]
    fn test_harvest_fee_receipt() {
        let raw = json!({
            "version": 1,
            "type": 8515,
            "targetPublicKey": PUBLIC_KEY,
            "mosaicId": "504677C3281108DB",
            "amount": "0",
        });

        let receipt = decode_receipt("r", &raw, NetworkType::MijinTest).unwrap();
        assert_eq!(
            receipt,
            Receipt::BalanceChange(BalanceChangeReceipt {
                receipt_type: ReceiptType::HarvestFee,
                version: 1,
                target: PublicAccount::new(
                    PublicKey::from_hex(PUBLIC_KEY).unwrap(),
                    NetworkType::MijinTest
                ),
                mosaic_id: MosaicId::new(0x504677C3281108DB),
                amount: 0,
            })
        );
    }

    #[test]
    fn test_mosaic_levy_receipt() {
        let raw = json!({
            "version": 1,
            "type": 0x1243,
            "senderPublicKey": PUBLIC_KEY,
            "recipientAddress": "901D8D4741F80299E66BF7FEEB4F30943DA7B68E068B182319",
            "mosaicId": "401F622A3111A3E4",
            "amount": "1000",
        });

        match decode_receipt("r", &raw, NetworkType::MijinTest).unwrap() {
            Receipt::BalanceTransfer(receipt) => {
                assert_eq!(receipt.receipt_type, ReceiptType::MosaicLevy);
                assert_eq!(
                    receipt.recipient.to_hex(),
                    "901D8D4741F80299E66BF7FEEB4F30943DA7B68E068B182319"
                );
                assert_eq!(receipt.amount, 1000);
            }
            other => panic!("unexpected receipt {:?}", other),
        }
    }

    #[test]
    fn test_artifact_expiry_receipts() {
        let mosaic = json!({"version": 1, "type": 0x414D, "artifactId": "504677C3281108DB"});
        let namespace = json!({"version": 1, "type": 0x424E, "artifactId": "85BBEA6CC462B244"});

        match decode_receipt("r", &mosaic, NetworkType::MijinTest).unwrap() {
            Receipt::ArtifactExpiry(receipt) => assert_eq!(
                receipt.artifact_id,
                ArtifactId::Mosaic(MosaicId::new(0x504677C3281108DB))
            ),
            other => panic!("unexpected receipt {:?}", other),
        }
        match decode_receipt("r", &namespace, NetworkType::MijinTest).unwrap() {
            Receipt::ArtifactExpiry(receipt) => {
                assert_eq!(receipt.receipt_type, ReceiptType::NamespaceDeleted);
                assert_eq!(
                    receipt.artifact_id,
                    ArtifactId::Namespace(NamespaceId::new(0x85BBEA6CC462B244))
                );
            }
            other => panic!("unexpected receipt {:?}", other),
        }
    }

    #[test]
    fn test_inflation_receipt() {
        let raw = json!({"version": 1, "type": 0x5143, "mosaicId": "504677C3281108DB", "amount": 76});
        assert_eq!(
            decode_receipt("r", &raw, NetworkType::MainNet).unwrap(),
            Receipt::Inflation(InflationReceipt {
                version: 1,
                mosaic_id: MosaicId::new(0x504677C3281108DB),
                amount: 76,
            })
        );
    }

    #[test]
    fn test_unknown_and_untyped_tags_are_opaque() {
        let unknown = json!({"version": 3, "type": 0x7E57, "futureField": [1, 2, 3]});
        let receipt = decode_receipt("r", &unknown, NetworkType::MainNet).unwrap();
        assert_eq!(
            receipt,
            Receipt::Opaque(OpaqueReceipt {
                type_tag: 0x7E57,
                version: Some(3),
                payload: unknown.clone(),
            })
        );

        let group = json!({"version": 1, "type": 0xE143});
        assert!(decode_receipt("r", &group, NetworkType::MainNet).unwrap().is_opaque());
    }

    #[test]
    fn test_known_receipt_with_bad_field_fails() {
        let raw = json!({
            "version": 1,
            "type": 8515,
            "targetPublicKey": "B2708D49",
            "mosaicId": "504677C3281108DB",
            "amount": "0",
        });
        let error = decode_receipt("receipts[0]", &raw, NetworkType::MijinTest).unwrap_err();
        assert!(matches!(
            error,
            DecodeError::InvalidField { field: "targetPublicKey", .. }
        ));
        assert_eq!(error.record_path(), Some("receipts[0]"));
    }

    #[test]
    fn test_receipt_without_type_fails() {
        let raw = json!({"version": 1, "mosaicId": "504677C3281108DB"});
        assert!(matches!(
            decode_receipt("r", &raw, NetworkType::MijinTest),
            Err(DecodeError::Record { .. })
        ));
    }

    #[test]
    fn test_unknown_tag_without_version_is_opaque() {
        let raw = json!({"type": 0x9999, "payload": "kept"});
        let receipt = decode_receipt("r", &raw, NetworkType::MainNet).unwrap();

        assert_eq!(receipt.type_tag(), 0x9999);
        assert_eq!(receipt.version(), None);
        assert!(receipt.is_opaque());
    }

    #[test]
    fn test_typed_receipt_without_version_fails() {
        let raw = json!({"type": 0x5143, "mosaicId": "504677C3281108DB", "amount": "76"});
        let error = decode_receipt("receipts[2]", &raw, NetworkType::MainNet).unwrap_err();

        assert!(matches!(error, DecodeError::MissingField { field: "version", .. }));
        assert_eq!(error.record_path(), Some("receipts[2]"));
    }
}
