//! Drive key codec.
//!
//! A drive key (and a content hash pin) is a fixed 32-byte identifier. Its
//! canonical text form is unpadded z-base-32 (52 characters); the 64
//! character hex form is accepted on input as well.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use data_encoding::{Encoding, Specification};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Length of a drive key in bytes.
pub const KEY_LEN: usize = 32;

/// Length of the z-base-32 text form of a key.
pub const Z32_KEY_LEN: usize = 52;

/// Length of the hex text form of a key.
pub const HEX_KEY_LEN: usize = 64;

const Z32_SYMBOLS: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";

/// Errors raised when key text cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The text is neither 52 (z-base-32) nor 64 (hex) characters long.
    #[error("Invalid key: expected 52 z-base-32 or 64 hex characters, got {0}")]
    InvalidLength(usize),

    /// The text has the right length but contains invalid symbols.
    #[error("Invalid key: malformed encoding")]
    InvalidEncoding,
}

fn z32() -> &'static Encoding {
    static Z32: OnceLock<Encoding> = OnceLock::new();
    Z32.get_or_init(|| {
        let mut spec = Specification::new();
        spec.symbols.push_str(Z32_SYMBOLS);
        // 256 bits leave 4 spare bits in the last symbol
        spec.check_trailing_bits = false;
        spec.encoding()
            .unwrap_or_else(|_| unreachable!("z-base-32 alphabet is a valid specification"))
    })
}

/// A 32-byte drive key or content hash.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DriveKey([u8; KEY_LEN]);

impl DriveKey {
    /// Wrap raw key bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Decode a key from its z-base-32 or hex text form.
    ///
    /// ```
    /// use pear_link::DriveKey;
    ///
    /// let key = DriveKey::decode("b9abnxwa71999xsweicj6ndya8w9w39z7ssg43pkohd76kzcgpmo").unwrap();
    /// assert_eq!(key.to_hex(), "0ff0113e98ecbfffbed445589f0860c1e9fa67f7edac6d65aa8707df2aec3357");
    /// ```
    pub fn decode(text: &str) -> Result<Self, KeyError> {
        let bytes = match text.len() {
            Z32_KEY_LEN => z32()
                .decode(text.as_bytes())
                .map_err(|_| KeyError::InvalidEncoding)?,
            HEX_KEY_LEN => hex::decode(text).map_err(|_| KeyError::InvalidEncoding)?,
            len => return Err(KeyError::InvalidLength(len)),
        };

        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| KeyError::InvalidEncoding)?;
        Ok(Self(bytes))
    }

    /// Canonical z-base-32 text form.
    pub fn encode(&self) -> String {
        z32().encode(&self.0)
    }

    /// Lowercase hex text form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; KEY_LEN]> for DriveKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for DriveKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for DriveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for DriveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DriveKey").field(&self.encode()).finish()
    }
}

impl FromStr for DriveKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for DriveKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for DriveKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::decode(&text).map_err(serde::de::Error::custom)
    }
}
