//! Digest value type
//!
//! A [`Digest`] is the 32-byte output of the tree's hash function. Its
//! canonical textual form is 64 lowercase hex characters without a `0x`
//! prefix; that form is what parent hashing concatenates, so [`Display`]
//! and [`Digest::to_hex`] are part of the commitment scheme, not just
//! presentation.
//!
//! ## Example Usage
//!
//! ```
//! use arbor_merkle::{Digest, hash};
//!
//! let digest = hash(b"a");
//! let text = digest.to_string();
//! assert_eq!(text.len(), 64);
//!
//! let parsed: Digest = text.parse().unwrap();
//! assert_eq!(parsed, digest);
//! assert_eq!(digest.short(8), "ca978112...");
//! ```
//!
//! [`Display`]: std::fmt::Display

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use alloy_primitives::{B256, hex};

use crate::constants::{HASH_SIZE, HEX_DIGEST_LENGTH};
use crate::error::{MerkleError, Result};

/// A 256-bit node digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digest(B256);

impl Digest {
    /// Creates a new digest from raw bytes
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(B256::new(bytes))
    }

    /// Returns the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Creates a digest from a slice, checking the length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = B256::try_from(slice).map_err(|_| {
            MerkleError::invalid_digest(format!(
                "expected {HASH_SIZE} bytes, got {}",
                slice.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Decodes a digest from hex, with or without a `0x` prefix
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| MerkleError::invalid_digest(format!("{e}: {text:?}")))?;
        Self::from_slice(&bytes)
    }

    /// Canonical lowercase hex encoding, as used when combining digests
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_slice())
    }

    /// Hex encoding cut to `len` characters, with `...` appended when cut
    pub fn short(&self, len: usize) -> String {
        let mut text = self.to_hex();
        if len < HEX_DIGEST_LENGTH {
            text.truncate(len);
            text.push_str("...");
        }
        text
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Deref for Digest {
    type Target = B256;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<B256> for Digest {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl From<[u8; HASH_SIZE]> for Digest {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for B256 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize<'de>>::deserialize(d)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
