#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

use crate::{Error, Result};

/// Represents a Universally Unique IDentifier.
///
/// The value is always exactly 16 bytes laid out in the RFC 4122 field order (big-endian):
///
/// ```text
/// time_low(4) | time_mid(2) | time_hi_and_version(2) | clock_seq_hi_and_reserved(1) |
/// clock_seq_low(1) | node(6)
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from the 128-bit unsigned integer representation.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Creates a UUID by copying exactly 16 raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `src` is not 16 bytes long. The input is never
    /// truncated or padded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Error, Uuid};
    ///
    /// let x = Uuid::from_slice(&[0xab; 16])?;
    /// assert_eq!(x.as_bytes(), &[0xab; 16]);
    /// assert_eq!(Uuid::from_slice(&[0xab; 15]), Err(Error::LengthMismatch { len: 15 }));
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::LengthMismatch { len: src.len() })
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the 128-bit unsigned integer representation.
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// Returns `true` if the value holds exactly 16 bytes.
    ///
    /// This is a structural check only and does not inspect the variant or version fields, so
    /// every in-memory `Uuid` is valid. Use [`Uuid::variant`] and [`Uuid::version`] to check RFC
    /// 4122 conformance.
    pub const fn is_valid(&self) -> bool {
        self.0.len() == 16
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.as_u128()
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

impl fmt::LowerHex for Uuid {
    /// Returns the 32-digit hexadecimal representation without hyphens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|e| write!(f, "{:02x}", e))
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::Uuid;
    use crate::Error;

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl From<Uuid> for Vec<u8> {
        fn from(src: Uuid) -> Self {
            src.0.to_vec()
        }
    }

    impl TryFrom<Vec<u8>> for Uuid {
        type Error = Error;

        fn try_from(src: Vec<u8>) -> Result<Self, Self::Error> {
            Self::from_slice(&src)
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                (
                    "efb65913-a881-4006-bce4-9fc33be32ddd",
                    &[
                        239, 182, 89, 19, 168, 129, 64, 6, 188, 228, 159, 195, 59, 227, 45, 221,
                    ],
                ),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "886313e1-3b8a-5372-9b90-0c9aee199e5d",
                    &[
                        136, 99, 19, 225, 59, 138, 83, 114, 155, 144, 12, 154, 238, 25, 158, 93,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Deserializes decorated strings leniently
        #[test]
        fn deserializes_decorated_strings_leniently() {
            let e = Uuid::from_u128(0xefb65913_a881_4006_bce4_9fc33be32ddd);
            assert_de_tokens(
                &e.readable(),
                &[Token::Str("{efb65913-a881-4006-bce4-9fc33be32ddd}")],
            );
            assert_de_tokens(
                &e.readable(),
                &[Token::Str("urn:uuid:efb65913a8814006bce49fc33be32ddd")],
            );
        }

        /// Rejects malformed strings and short byte arrays
        #[test]
        fn rejects_malformed_strings_and_short_byte_arrays() {
            assert_de_tokens_error::<serde_test::Readable<Uuid>>(
                &[Token::Str("not-a-uuid")],
                "invalid string representation",
            );
            assert_de_tokens_error::<serde_test::Compact<Uuid>>(
                &[Token::Bytes(&[0u8; 15])],
                "uuid must be 16 bytes, got 15",
            );
        }

        /// Round-trips through JSON as canonical string
        #[test]
        fn round_trips_through_json_as_canonical_string() {
            let e = Uuid::from_u128(0xefb65913_a881_4006_bce4_9fc33be32ddd);
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(json, "\"efb65913-a881-4006-bce4-9fc33be32ddd\"");
            assert_eq!(serde_json::from_str::<Uuid>(&json).unwrap(), e);
        }
    }
}
