use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution-order position of a transaction inside a block
///
/// `primary_id` is the index of the top-level transaction and `secondary_id`
/// the index of the inner transaction within an aggregate (0 when the
/// transaction is not part of an aggregate).
///
/// The derived ordering compares `primary_id` first and `secondary_id` second,
/// so the field order below must not change.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierCoordinate {
    pub primary_id: u32,
    pub secondary_id: u32,
}

impl IdentifierCoordinate {
    pub const fn new(primary_id: u32, secondary_id: u32) -> Self {
        Self {
            primary_id,
            secondary_id,
        }
    }

    /// Check whether this coordinate points at an inner transaction of an aggregate
    pub fn is_inner(&self) -> bool {
        self.secondary_id != 0
    }
}

impl From<(u32, u32)> for IdentifierCoordinate {
    fn from((primary_id, secondary_id): (u32, u32)) -> Self {
        Self::new(primary_id, secondary_id)
    }
}

impl fmt::Display for IdentifierCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.primary_id, self.secondary_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_id_dominates_ordering() {
        assert!(IdentifierCoordinate::new(1, 9) < IdentifierCoordinate::new(2, 0));
        assert!(IdentifierCoordinate::new(3, 1) < IdentifierCoordinate::new(3, 5));
        assert!(IdentifierCoordinate::new(3, 5) > IdentifierCoordinate::new(1, 0));
        assert_eq!(IdentifierCoordinate::new(2, 2), (2, 2).into());
    }

    #[test]
    fn test_inner_transaction_detection() {
        assert!(!IdentifierCoordinate::new(4, 0).is_inner());
        assert!(IdentifierCoordinate::new(4, 1).is_inner());
    }

    #[test]
    fn test_wire_field_names() {
        let coordinate: IdentifierCoordinate =
            serde_json::from_str(r#"{"primaryId": 3, "secondaryId": 5}"#).unwrap();
        assert_eq!(coordinate, IdentifierCoordinate::new(3, 5));
        assert_eq!(coordinate.to_string(), "(3, 5)");
    }
}
