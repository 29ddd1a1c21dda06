//! Adapters for nullable storage columns
//!
//! Database drivers hand values over as raw bytes, text, or already-typed values, and represent
//! SQL `NULL` separately from any UUID. [`ScanSource`] models the former and [`NullUuid`] the
//! latter, so that an absent value never has to be disguised as [`Uuid::NIL`].

#[cfg(not(feature = "std"))]
use core as std;

use std::str;

use fstr::FStr;

use crate::{Error, Result, Uuid};

/// A source value handed over by a storage driver.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScanSource<'a> {
    /// 16 raw bytes, or the UTF-8 bytes of a text representation.
    Bytes(&'a [u8]),

    /// Any text representation accepted by [`Uuid::parse`].
    Text(&'a str),

    /// An already-constructed UUID.
    Uuid(Uuid),
}

impl<'a> From<&'a [u8]> for ScanSource<'a> {
    fn from(src: &'a [u8]) -> Self {
        Self::Bytes(src)
    }
}

impl<'a> From<&'a str> for ScanSource<'a> {
    fn from(src: &'a str) -> Self {
        Self::Text(src)
    }
}

impl From<Uuid> for ScanSource<'_> {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl Uuid {
    /// Creates a UUID from a driver-provided source value.
    ///
    /// Byte input of exactly 16 bytes is copied verbatim; other byte input is read as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedText`] if text cannot be parsed, or [`Error::LengthMismatch`] if
    /// byte input is neither 16 bytes long nor valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{ScanSource, Uuid};
    ///
    /// let x = Uuid::scan(ScanSource::Text("efb65913a8814006bce49fc33be32ddd"))?;
    /// assert_eq!(Uuid::scan(ScanSource::Bytes(x.as_bytes()))?, x);
    /// assert_eq!(Uuid::scan(ScanSource::Uuid(x))?, x);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn scan(src: ScanSource<'_>) -> Result<Self> {
        match src {
            ScanSource::Uuid(uuid) => Ok(uuid),
            ScanSource::Text(text) => Self::parse(text),
            ScanSource::Bytes(bytes) if bytes.len() == 16 => Self::from_slice(bytes),
            ScanSource::Bytes(bytes) => str::from_utf8(bytes)
                .map_err(|_| Error::LengthMismatch { len: bytes.len() })
                .and_then(Self::parse),
        }
    }

    /// Returns the value to hand over to a storage driver: the canonical string representation.
    pub fn value(&self) -> FStr<36> {
        self.encode()
    }
}

/// A UUID that may be absent, distinct from [`Uuid::NIL`].
///
/// # Examples
///
/// ```rust
/// use rfc4122::{NullUuid, ScanSource};
///
/// let mut x = NullUuid::NULL;
/// x.scan(Some(ScanSource::Text("{efb65913-a881-4006-bce4-9fc33be32ddd}")))?;
/// assert!(x.valid);
/// assert_eq!(x.value().as_deref(), Some("efb65913-a881-4006-bce4-9fc33be32ddd"));
///
/// x.scan(None)?;
/// assert!(!x.valid);
/// assert_eq!(x.value(), None);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NullUuid {
    /// The wrapped value, [`Uuid::NIL`] while absent.
    pub uuid: Uuid,

    /// `true` if `uuid` holds a present value.
    pub valid: bool,
}

impl NullUuid {
    /// The absent value.
    pub const NULL: Self = Self {
        uuid: Uuid::NIL,
        valid: false,
    };

    /// Wraps a present value.
    pub const fn new(uuid: Uuid) -> Self {
        Self { uuid, valid: true }
    }

    /// Returns the wrapped UUID if present.
    pub const fn get(&self) -> Option<Uuid> {
        if self.valid {
            Some(self.uuid)
        } else {
            None
        }
    }

    /// Returns the value to hand over to a storage driver, or `None` to store `NULL`.
    pub fn value(&self) -> Option<FStr<36>> {
        self.get().map(|e| e.value())
    }

    /// Reads a driver-provided value, where `None` stands for `NULL`.
    ///
    /// `None` resets the wrapper to [`NullUuid::NULL`]. On error the wrapper is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Uuid::scan`] if the source cannot be read.
    pub fn scan(&mut self, src: Option<ScanSource<'_>>) -> Result<()> {
        *self = match src {
            Some(src) => Self::new(Uuid::scan(src)?),
            None => Self::NULL,
        };
        Ok(())
    }
}

impl From<Uuid> for NullUuid {
    fn from(src: Uuid) -> Self {
        Self::new(src)
    }
}

impl From<Option<Uuid>> for NullUuid {
    fn from(src: Option<Uuid>) -> Self {
        src.map_or(Self::NULL, Self::new)
    }
}

impl From<NullUuid> for Option<Uuid> {
    fn from(src: NullUuid) -> Self {
        src.get()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{NullUuid, Uuid};
    use serde::{Deserializer, Serializer};

    impl serde::Serialize for NullUuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.get() {
                Some(uuid) => serializer.serialize_some(&uuid),
                None => serializer.serialize_none(),
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for NullUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            <Option<Uuid> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::{NullUuid, Uuid};

        /// Marshals absent value as null
        #[test]
        fn marshals_absent_value_as_null() {
            assert_eq!(serde_json::to_string(&NullUuid::NULL).unwrap(), "null");
            assert_eq!(
                serde_json::from_str::<NullUuid>("null").unwrap(),
                NullUuid::NULL
            );

            let invalid = NullUuid {
                uuid: Uuid::MAX,
                valid: false,
            };
            assert_eq!(serde_json::to_string(&invalid).unwrap(), "null");
        }

        /// Marshals present value as canonical string
        #[test]
        fn marshals_present_value_as_canonical_string() {
            let x = NullUuid::new(Uuid::from_u128(0xefb65913_a881_4006_bce4_9fc33be32ddd));
            let json = serde_json::to_string(&x).unwrap();
            assert_eq!(json, "\"efb65913-a881-4006-bce4-9fc33be32ddd\"");
            assert_eq!(serde_json::from_str::<NullUuid>(&json).unwrap(), x);
            assert_eq!(
                serde_json::from_str::<NullUuid>("\"urn:uuid:efb65913a8814006bce49fc33be32ddd\"")
                    .unwrap(),
                x
            );
            assert!(serde_json::from_str::<NullUuid>("\"not-a-uuid\"").is_err());
        }
    }
}
