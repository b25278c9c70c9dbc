//! Digest derivation - turns a password into the range-query lookup key.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest as _, Sha1};

/// Number of leading digest characters disclosed to the remote service.
pub const PREFIX_LEN: usize = 5;

/// SHA-1 digest of a password, as 40 uppercase hex characters.
///
/// This digest exists only as a lookup key for the breach range-query
/// protocol. It is NOT a storage-grade password hash and must never be
/// persisted as one.
///
/// The digest splits into a disclosed 5-character `prefix` (the only part
/// that ever leaves the process) and a withheld 35-character `suffix`
/// compared locally against the returned candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    /// Derives the digest of a password. Deterministic, no side effects.
    pub fn derive(password: &SecretString) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.expose_secret().as_bytes());
        Digest(hex::encode_upper(hasher.finalize()))
    }

    /// The full 40-character uppercase hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The disclosed prefix, sent to the remote range endpoint.
    pub fn prefix(&self) -> &str {
        &self.0[..PREFIX_LEN]
    }

    /// The withheld suffix, compared locally against returned records.
    pub fn suffix(&self) -> &str {
        &self.0[PREFIX_LEN..]
    }
}
