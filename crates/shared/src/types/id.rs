//! Typed IDs for type-safe entity references.
//!
//! The reporting schema keys every table by a serial integer. Wrapping those
//! keys prevents passing a `SchoolId` where a `DistrictId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers around `i32` primary keys.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Creates an ID from a raw key.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the raw key.
            #[must_use]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(DistrictId, "Unique identifier for a school district.");
typed_id!(SchoolId, "Unique identifier for a school.");
typed_id!(GradeId, "Unique identifier for a grade level.");
typed_id!(DoeFormId, "Unique identifier for a DOE financial form.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
