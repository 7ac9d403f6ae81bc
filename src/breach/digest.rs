//! SHA-1 digest of a password, split for a range query.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Length of the uppercase hex digest.
pub const DIGEST_HEX_LEN: usize = 40;

/// Number of hex characters sent to the range service.
pub const PREFIX_LEN: usize = 5;

/// Uppercase hex SHA-1 of a password. Lives only for one lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: String,
}

impl PasswordDigest {
    pub fn of(password: &SecretString) -> Self {
        let hash = Sha1::digest(password.expose_secret().as_bytes());
        Self {
            hex: hex::encode_upper(hash),
        }
    }

    /// The part of the digest that is sent over the network.
    pub fn prefix(&self) -> HashPrefix {
        HashPrefix(self.hex[..PREFIX_LEN].to_string())
    }

    /// The part of the digest that is matched locally and never sent.
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LEN..]
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordDigest({}…)", &self.hex[..PREFIX_LEN])
    }
}

/// Five uppercase hex characters identifying a hash range.
///
/// A [`RangeSource`](crate::breach::RangeSource) only ever receives this
/// type, so it cannot see more of the digest than the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashPrefix(String);

impl HashPrefix {
    /// Parses a prefix, normalizing to uppercase. Rejects anything that is
    /// not exactly five hex characters.
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() == PREFIX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(value.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
