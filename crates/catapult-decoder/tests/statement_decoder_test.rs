//! End-to-end decoding tests against a recorded block statement payload

use catapult_core_types::{
    Address, IdentifierCoordinate, MosaicId, NamespaceId, NetworkType, Receipt, ReceiptType,
    ResolvedIdentifier, UnresolvedAddress, UnresolvedMosaicId,
};
use catapult_decoder::{decode_merkle_proof, decode_statement, DecodeError, StatementDecoder};
use catapult_proofs::{MerkleProofVerifier, MerkleTree, Sha3_256Hasher};
use serde_json::{json, Value};

const BLOCK_STATEMENTS: &str = include_str!("fixtures/block_statements.json");

fn payload() -> Value {
    serde_json::from_str(BLOCK_STATEMENTS).expect("fixture is valid JSON")
}

fn at(primary_id: u32, secondary_id: u32) -> IdentifierCoordinate {
    IdentifierCoordinate::new(primary_id, secondary_id)
}

fn mosaic(hex: &str) -> MosaicId {
    MosaicId::from_hex(hex).unwrap()
}

#[test]
fn test_decodes_all_collections() {
    let statement = StatementDecoder::new(NetworkType::MijinTest)
        .decode_str(BLOCK_STATEMENTS)
        .unwrap();

    assert_eq!(statement.transaction_statements().len(), 1);
    assert_eq!(statement.address_resolution_statements().len(), 1);
    assert_eq!(statement.mosaic_resolution_statements().len(), 3);

    let transaction = &statement.transaction_statements()[0];
    assert_eq!(transaction.height, 1473);
    assert_eq!(transaction.source, at(0, 0));
    match &transaction.receipts()[0] {
        Receipt::BalanceChange(receipt) => {
            assert_eq!(receipt.receipt_type, ReceiptType::HarvestFee);
            assert_eq!(receipt.target.network_type, NetworkType::MijinTest);
            assert_eq!(receipt.mosaic_id, mosaic("504677C3281108DB"));
        }
        other => panic!("unexpected receipt {:?}", other),
    }
}

#[test]
fn test_address_resolution_matches_on_exact_coordinate() {
    let statement = decode_statement(&payload(), NetworkType::MijinTest).unwrap();
    let resolution = &statement.address_resolution_statements()[0];

    assert_eq!(
        resolution.unresolved(),
        &UnresolvedAddress::Alias(NamespaceId::new(0xA530F056E38D2556))
    );
    let entry = resolution.resolution_entry_at(at(1, 0)).unwrap();
    assert_eq!(
        entry.resolved,
        Address::from_hex("901D8D4741F80299E66BF7FEEB4F30943DA7B68E068B182319").unwrap()
    );
    assert!(resolution.resolution_entry_at(at(0, 0)).is_none());
}

#[test]
fn test_mosaic_resolution_floor_lookups() {
    let statement = decode_statement(&payload(), NetworkType::MijinTest).unwrap();
    let resolution = &statement.mosaic_resolution_statements()[0];

    let entry = resolution.resolution_entry_at(at(4, 0)).unwrap();
    assert_eq!(entry.source, at(3, 5));
    assert_eq!(entry.resolved, mosaic("401F622A3111A3E4"));

    let entry = resolution.resolution_entry_at(at(2, 1)).unwrap();
    assert_eq!(entry.source, at(1, 0));
    assert_eq!(entry.resolved, mosaic("504677C3281108DB"));

    let entry = resolution.resolution_entry_at(at(3, 6)).unwrap();
    assert_eq!(entry.source, at(3, 5));

    let entry = resolution.resolution_entry_at(at(3, 1)).unwrap();
    assert_eq!(entry.source, at(1, 0));
    assert_eq!(entry.resolved, mosaic("504677C3281108DB"));

    assert_eq!(resolution.resolve_at(at(1, 0)), Some(&mosaic("504677C3281108DB")));
    assert_eq!(resolution.resolve_at(at(0, 0)), None);
}

#[test]
fn test_statement_level_resolution_across_heights() {
    let statement = decode_statement(&payload(), NetworkType::MijinTest).unwrap();
    let alias: UnresolvedMosaicId = NamespaceId::new(0x85BBEA6CC462B244).into();

    assert_eq!(
        statement.resolve(1473, &alias.into(), at(3, 6)),
        Some(ResolvedIdentifier::Mosaic(mosaic("401F622A3111A3E4")))
    );
    assert_eq!(
        statement.resolve_mosaic_id(1500, &alias, at(1, 6)),
        Some(mosaic("7CDF3B117A3C40CC"))
    );
    assert_eq!(statement.resolve_mosaic_id(1500, &alias, at(1, 0)), None);

    let other_alias = UnresolvedMosaicId::from_hex("E81F622A5B11A340").unwrap();
    assert_eq!(
        statement.resolve_mosaic_id(1473, &other_alias, at(3, 1)),
        Some(mosaic("756482FB80FD406C"))
    );
}

#[test]
fn test_unknown_receipt_type_keeps_rest_of_statement() {
    let mut payload = payload();
    payload["transactionStatements"][0]["statement"]["receipts"]
        .as_array_mut()
        .unwrap()
        .push(json!({"version": 1, "type": 0xABCD, "somethingNew": "ok"}));

    let statement = decode_statement(&payload, NetworkType::MijinTest).unwrap();
    let receipts = statement.transaction_statements()[0].receipts();
    assert_eq!(receipts.len(), 2);
    assert!(!receipts[0].is_opaque());
    assert!(receipts[1].is_opaque());
    assert_eq!(receipts[1].type_tag(), 0xABCD);
    assert_eq!(statement.mosaic_resolution_statements().len(), 3);
}

#[test]
fn test_missing_required_fields_name_the_record() {
    let mut payload = payload();
    payload["mosaicResolutionStatements"][2]["statement"]
        .as_object_mut()
        .unwrap()
        .remove("height");

    let error = decode_statement(&payload, NetworkType::MijinTest).unwrap_err();
    assert_eq!(error.record_path(), Some("mosaicResolutionStatements[2]"));
    assert!(error.to_string().contains("height"));

    let mut payload = self::payload();
    payload.as_object_mut().unwrap().remove("addressResolutionStatements");
    assert!(matches!(
        decode_statement(&payload, NetworkType::MijinTest),
        Err(DecodeError::MissingField { field: "addressResolutionStatements", .. })
    ));
}

#[test]
fn test_out_of_order_entries_are_an_integrity_violation() {
    let mut payload = payload();
    let entries = payload["mosaicResolutionStatements"][2]["statement"]["resolutionEntries"]
        .as_array_mut()
        .unwrap();
    entries.swap(1, 2);

    let error = decode_statement(&payload, NetworkType::MijinTest).unwrap_err();
    assert!(matches!(error, DecodeError::Integrity { .. }));
    assert_eq!(error.record_path(), Some("mosaicResolutionStatements[2]"));
}

#[test]
fn test_decoded_proof_verifies_against_block_root() {
    let leaves: Vec<[u8; 32]> = (1..=5u8).map(|i| [i; 32]).collect();
    let tree = MerkleTree::build(&leaves, &Sha3_256Hasher);
    let proof = tree.path(3).unwrap();

    // Serve the proof the way a node does
    let served = json!({
        "merklePath": proof.items().iter().map(|item| json!({
            "position": item.position,
            "hash": item.hash.iter().map(|b| format!("{:02X}", b)).collect::<String>(),
        })).collect::<Vec<_>>()
    });

    let decoded = decode_merkle_proof(&served).unwrap();
    assert_eq!(decoded, proof);

    let verifier = MerkleProofVerifier::new();
    assert!(verifier.verify(&leaves[3], &decoded, &tree.root()));
    assert!(!verifier.verify(&leaves[4], &decoded, &tree.root()));
}
