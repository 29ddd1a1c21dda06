//! Name-based UUIDs (versions 3 and 5)

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::{Error, Result, Uuid, Variant};

/// Generates a UUIDv3 object from a namespace and a name using MD5.
///
/// The same pair of inputs always produces the same UUID. Any namespace value, the Nil UUID
/// included, is a valid hashing root.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{namespace, uuid3};
///
/// let uuid = uuid3(&namespace::DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// assert_eq!(uuid.version(), 3);
/// ```
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    hash_name::<Md5>(namespace, name.as_ref(), 3)
}

/// Generates a UUIDv5 object from a namespace and a name using SHA-1.
///
/// The same pair of inputs always produces the same UUID. Any namespace value, the Nil UUID
/// included, is a valid hashing root.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{namespace, uuid5};
///
/// let uuid = uuid5(&namespace::DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// assert_eq!(uuid.version(), 5);
/// ```
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    hash_name::<Sha1>(namespace, name.as_ref(), 5)
}

impl Uuid {
    /// Creates a UUIDv3 object from an optional namespace and a name. See [`uuid3`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NilNamespace`] if `namespace` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{namespace, uuid3, Error, Uuid};
    ///
    /// let ns: Option<&Uuid> = Some(&namespace::URL);
    /// assert_eq!(Uuid::new_v3(ns, b"http://golang.go"), Ok(uuid3(&namespace::URL, "http://golang.go")));
    /// assert_eq!(Uuid::new_v3(None, b"http://golang.go"), Err(Error::NilNamespace));
    /// ```
    pub fn new_v3(namespace: Option<&Uuid>, name: &[u8]) -> Result<Self> {
        namespace
            .map(|ns| uuid3(ns, name))
            .ok_or(Error::NilNamespace)
    }

    /// Creates a UUIDv5 object from an optional namespace and a name. See [`uuid5`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NilNamespace`] if `namespace` is `None`.
    pub fn new_v5(namespace: Option<&Uuid>, name: &[u8]) -> Result<Self> {
        namespace
            .map(|ns| uuid5(ns, name))
            .ok_or(Error::NilNamespace)
    }
}

/// Digests `namespace || name` and stamps the first 16 bytes with the variant and version.
fn hash_name<D: Digest>(namespace: &Uuid, name: &[u8], version: u8) -> Uuid {
    let digest = D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);

    let mut uuid = Uuid::from(bytes);
    uuid.set_variant(Variant::Rfc4122);
    uuid.set_version(version);
    uuid
}
