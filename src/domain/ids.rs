//! Typed entity identifiers.
//!
//! Every entity id serialises as `"<prefix>-<uuid>"`. The prefix names the
//! entity type so a bare id string in a log line or a session blob is still
//! self-describing; the UUID suffix makes generation collision-resistant
//! under rapid sequential creates. Ids parse back through serde with full
//! validation, so a foreign blob containing a malformed id fails loudly at
//! the boundary instead of deep inside a lookup.

use std::fmt;

use uuid::Uuid;

/// Validation errors shared by all entity id newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    /// The id string was empty.
    #[error("{kind} id must not be empty")]
    Empty {
        /// Entity kind the id belongs to.
        kind: &'static str,
    },
    /// The id did not start with the expected type prefix.
    #[error("{kind} id must start with '{prefix}-'")]
    WrongPrefix {
        /// Entity kind the id belongs to.
        kind: &'static str,
        /// Expected prefix.
        prefix: &'static str,
    },
    /// The suffix after the prefix was not a valid UUID.
    #[error("{kind} id suffix must be a valid UUID")]
    InvalidSuffix {
        /// Entity kind the id belongs to.
        kind: &'static str,
    },
}

macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $name:ident, kind: $kind:literal, prefix: $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Type prefix carried by every id of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Validate and construct an id from borrowed input.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
                Self::from_owned(id.as_ref().to_owned())
            }

            /// Generate a fresh random id.
            pub fn random() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4()))
            }

            fn from_owned(id: String) -> Result<Self, IdValidationError> {
                if id.is_empty() {
                    return Err(IdValidationError::Empty { kind: $kind });
                }
                let suffix = id
                    .strip_prefix(concat!($prefix, "-"))
                    .ok_or(IdValidationError::WrongPrefix {
                        kind: $kind,
                        prefix: $prefix,
                    })?;
                Uuid::parse_str(suffix)
                    .map_err(|_| IdValidationError::InvalidSuffix { kind: $kind })?;
                Ok(Self(id))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_owned(value)
            }
        }
    };
}

define_entity_id! {
    /// Stable user identifier.
    UserId, kind: "user", prefix: "usr"
}

define_entity_id! {
    /// Stable building identifier.
    BuildingId, kind: "building", prefix: "bld"
}

define_entity_id! {
    /// Stable apartment identifier.
    ApartmentId, kind: "apartment", prefix: "apt"
}

define_entity_id! {
    /// Stable inventory item identifier.
    ItemId, kind: "inventory item", prefix: "itm"
}

define_entity_id! {
    /// Stable inspection identifier.
    InspectionId, kind: "inspection", prefix: "ins"
}
