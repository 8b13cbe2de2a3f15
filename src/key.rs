//! Decryption key parsing and encoding.
//!
//! Smart meters that push encrypted telemetry over a serial link are
//! provisioned with a 128-bit key, conventionally written by utilities as a
//! 32-character hexadecimal string. This module owns the conversion between
//! that textual form and the fixed 16-byte value embedded in firmware.

use core::fmt;
use core::str::FromStr;

use arrayvec::ArrayString;

use crate::codegen::ArrayInitializer;
use crate::error::KeyError;

/// Length of a decryption key in bytes.
pub const KEY_LEN: usize = 16;

/// Length of a decryption key in hexadecimal characters.
pub const KEY_HEX_LEN: usize = 2 * KEY_LEN;

/// A validated 16-byte meter decryption key.
///
/// Byte order matches the left-to-right order of the hex pairs in the
/// textual form: byte 0 comes from characters [0..2], byte 15 from
/// characters [30..32]. The consuming firmware depends on this order, so it
/// is preserved through every conversion this type offers.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct DecryptionKey([u8; KEY_LEN]);

impl DecryptionKey {
    /// Parses a 32-character hexadecimal string into a `DecryptionKey`.
    ///
    /// The input must consist of exactly 32 hex digit characters
    /// (case-insensitive). Each consecutive pair of characters becomes one
    /// byte of the key.
    ///
    /// # Errors
    ///
    /// * [`KeyError::Length`] if the character count is not 32.
    /// * [`KeyError::Format`] if any pair is not a valid hex byte.
    pub fn parse(text: &str) -> Result<Self, KeyError> {
        let found = text.chars().count();
        if found != KEY_HEX_LEN {
            return Err(KeyError::Length { found });
        }

        let mut bytes = [0u8; KEY_LEN];
        let mut chars = text.chars();
        for (index, slot) in bytes.iter_mut().enumerate() {
            // The length check above guarantees both characters are present.
            let (Some(hi), Some(lo)) = (chars.next(), chars.next()) else {
                return Err(KeyError::Length { found });
            };
            match (hi.to_digit(16), lo.to_digit(16)) {
                (Some(h), Some(l)) => *slot = ((h << 4) | l) as u8,
                _ => return Err(KeyError::Format { hi, lo, index }),
            }
        }
        Ok(Self(bytes))
    }

    /// Creates a key directly from raw bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the key bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Consumes the key, returning the raw byte array.
    #[inline]
    pub const fn into_bytes(self) -> [u8; KEY_LEN] {
        self.0
    }

    /// Re-encodes the key as 32 uppercase hexadecimal characters.
    ///
    /// Inverse of [`parse`](Self::parse) up to case: for any valid input
    /// string `s`, `parse(s)?.encode_hex()` equals `s` with all letters
    /// uppercased.
    pub fn encode_hex(&self) -> ArrayString<KEY_HEX_LEN> {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
        let mut out = ArrayString::new();
        for byte in self.0 {
            out.push(DIGITS[(byte >> 4) as usize] as char);
            out.push(DIGITS[(byte & 0x0F) as usize] as char);
        }
        out
    }

    /// Returns an adapter that formats the key as a brace-enclosed array
    /// initializer for generated source. See [`ArrayInitializer`].
    pub fn initializer(&self) -> ArrayInitializer<'_> {
        ArrayInitializer::new(self)
    }
}

impl FromStr for DecryptionKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; KEY_LEN]> for DecryptionKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<DecryptionKey> for [u8; KEY_LEN] {
    fn from(key: DecryptionKey) -> Self {
        key.0
    }
}

impl fmt::Display for DecryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DecryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecryptionKey({})", self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecryptionKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = DecryptionKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 32 character hexadecimal string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                DecryptionKey::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DecryptionKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode_hex())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_hex_string() {
        let k: DecryptionKey =
            serde_json::from_str("\"AaBbCcDdEeFf00112233445566778899\"").unwrap();
        assert_eq!(k.as_bytes()[0], 0xAA);
        assert_eq!(k.as_bytes()[15], 0x99);
    }

    #[test]
    fn test_deserialize_rejects_invalid_input() {
        assert!(serde_json::from_str::<DecryptionKey>("\"abc\"").is_err());
        assert!(serde_json::from_str::<DecryptionKey>("\"GG000000000000000000000000000000\"").is_err());
        assert!(serde_json::from_str::<DecryptionKey>("42").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let k = DecryptionKey::from([0xAB; 16]);
        let json = serde_json::to_string(&k).unwrap();
        assert_eq!(json, "\"ABABABABABABABABABABABABABABABAB\"");
        let back: DecryptionKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, k);
    }
}
