//! Strongly-typed entity identifiers.
//!
//! Ids are strings underneath: seed data uses human slugs (`"todo"`,
//! `"task-1"`) while freshly minted ids are ULIDs, which are unique for the
//! lifetime of any board they land on.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh ULID-backed id.
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string (slug or ULID).
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The id as a string slice.
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
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a task (card) on the board.
    TaskId
}

string_id! {
    /// Identifier of a column (workflow stage).
    ColumnId
}

string_id! {
    /// Identifier of a comment within a task's discussion thread.
    CommentId
}
