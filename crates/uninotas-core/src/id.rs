//! Identifier generation for uninotas
//!
//! IDs are ULIDs with a short kind prefix: `rec-` for course records,
//! `usr-` for accounts. ULIDs sort by creation time.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{Result, UninotasError};

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr, $context:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh ID
            pub fn generate() -> Self {
                $name(format!("{}{}", Self::PREFIX, Ulid::new().to_string().to_lowercase()))
            }

            /// Parse an existing ID, checking the prefix and ULID body
            pub fn parse(raw: &str) -> Result<Self> {
                let body = raw
                    .strip_prefix(Self::PREFIX)
                    .ok_or_else(|| UninotasError::invalid_value($context, raw))?;
                Ulid::from_string(&body.to_uppercase())
                    .map_err(|_| UninotasError::invalid_value($context, raw))?;
                Ok($name(raw.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = UninotasError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }
    };
}

prefixed_id!(
    /// Course record identifier (`rec-<ulid>`)
    RecordId,
    "rec-",
    "record id"
);

prefixed_id!(
    /// Account identifier (`usr-<ulid>`)
    UserId,
    "usr-",
    "user id"
);
