//! Salted password digests for local accounts

use sha2::{Digest, Sha256};
use ulid::Ulid;

/// Fresh per-account salt
pub(super) fn generate_salt() -> String {
    Ulid::new().to_string().to_lowercase()
}

/// Hex SHA-256 of `salt || password`
pub(super) fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare without short-circuiting on the first differing byte
pub(super) fn verify(salt: &str, password: &str, expected_hex: &str) -> bool {
    let actual = digest(salt, password);
    actual.len() == expected_hex.len()
        && actual
            .bytes()
            .zip(expected_hex.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
