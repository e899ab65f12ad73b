use catapult_core_types::merkle::hash_from_hex;
use catapult_core_types::{MerklePathItem, MerkleProofInfo};
use serde_json::Value;

use crate::dto::{from_record, MerkleProofInfoDto};
use crate::error::{parse_field, DecodeResult};

/// Decode a `{ "merklePath": [{ "position": "left", "hash": "..." }] }` payload
///
/// Path order is kept exactly as served.
pub fn decode_merkle_proof(payload: &Value) -> DecodeResult<MerkleProofInfo> {
    let dto: MerkleProofInfoDto = from_record("merkle proof", payload)?;

    let merkle_path = dto
        .merkle_path
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let hash = parse_field(
                &format!("merklePath[{}]", index),
                "hash",
                hash_from_hex(&item.hash),
            )?;
            Ok(MerklePathItem::new(item.position, hash))
        })
        .collect::<DecodeResult<Vec<_>>>()?;

    Ok(MerkleProofInfo::new(merkle_path))
}

pub fn decode_merkle_proof_slice(payload: &[u8]) -> DecodeResult<MerkleProofInfo> {
    let payload: Value = serde_json::from_slice(payload)?;
    decode_merkle_proof(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use catapult_core_types::MerklePosition;
    use serde_json::json;

    #[test]
    fn test_path_order_is_preserved() {
        let payload = json!({
            "merklePath": [
                {"position": "right", "hash": "11".repeat(32)},
                {"position": "left", "hash": "22".repeat(32)},
                {"position": "right", "hash": "33".repeat(32)},
            ]
        });

        let proof = decode_merkle_proof(&payload).unwrap();
        assert_eq!(
            proof.items(),
            &[
                MerklePathItem::new(MerklePosition::Right, [0x11; 32]),
                MerklePathItem::new(MerklePosition::Left, [0x22; 32]),
                MerklePathItem::new(MerklePosition::Right, [0x33; 32]),
            ]
        );
    }

    #[test]
    fn test_empty_path() {
        let proof = decode_merkle_proof_slice(br#"{"merklePath": []}"#).unwrap();
        assert!(proof.is_empty());
    }

    #[test]
    fn test_bad_entries_are_rejected() {
        let bad_position = json!({"merklePath": [{"position": "up", "hash": "11".repeat(32)}]});
        assert!(matches!(
            decode_merkle_proof(&bad_position),
            Err(DecodeError::Record { .. })
        ));

        let short_hash = json!({"merklePath": [{"position": "left", "hash": "1111"}]});
        let error = decode_merkle_proof(&short_hash).unwrap_err();
        assert_eq!(error.record_path(), Some("merklePath[0]"));

        assert!(decode_merkle_proof(&json!({})).is_err());
    }
}
