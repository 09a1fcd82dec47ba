//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `BudgetId` where an
//! `AccountId` is expected. IDs are UUID v7 (time-ordered), so sorting by id
//! sorts by creation time; the assignment engine relies on this for its
//! lowest-id tie-break.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(AccountId, "Unique identifier for an analytical account.");
typed_id!(BudgetId, "Unique identifier for a budget.");
typed_id!(RuleId, "Unique identifier for an auto-assignment rule.");
typed_id!(DocumentId, "Unique identifier for a transactional document.");
typed_id!(PartnerId, "Unique identifier for a business partner.");
typed_id!(PartnerTagId, "Unique identifier for a partner tag.");
typed_id!(ProductId, "Unique identifier for a product.");
typed_id!(ProductCategoryId, "Unique identifier for a product category.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_from_uuid_roundtrip() {
        let uuid = Uuid::new_v4();
        let id = AccountId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_typed_id_parse() {
        let id = BudgetId::new();
        let parsed = BudgetId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_typed_id_parse_invalid() {
        assert!(RuleId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        // v7 ids embed a millisecond timestamp; ids minted later never sort
        // before ids minted in an earlier millisecond.
        let first = RuleId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = RuleId::new();
        assert!(first < second);
    }
}
