//! Typed entity identifiers
//!
//! Each entity kind gets its own newtype over a ULID string so that a card id
//! can never be passed where a column id is expected. ULIDs are
//! collision-resistant within a board's lifetime and sort by creation time,
//! which makes snapshots stable to diff.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-backed id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string (e.g. read back from a snapshot)
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::from_string(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

entity_id! {
    /// Identifier for a [`Column`](crate::types::Column)
    ColumnId
}

entity_id! {
    /// Identifier for a [`Card`](crate::types::Card)
    CardId
}

entity_id! {
    /// Identifier for a [`Label`](crate::types::Label)
    LabelId
}
