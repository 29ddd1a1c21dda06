//! Name space IDs predefined by RFC 4122 Appendix C
//!
//! These are the hashing roots for [`uuid3`](crate::uuid3) and [`uuid5`](crate::uuid5).
//!
//! ```rust
//! use rfc4122::{namespace, uuid5};
//!
//! let uuid = uuid5(&namespace::DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! ```

use crate::Uuid;

/// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
pub const DNS: Uuid = Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

/// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
pub const URL: Uuid = Uuid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

/// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
pub const OID: Uuid = Uuid::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

/// Name space for X.500 DNs in DER or text output format (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
pub const X500: Uuid = Uuid::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

#[cfg(test)]
mod tests {
    use super::{DNS, OID, URL, X500};
    use crate::{Uuid, Variant};

    /// Matches RFC 4122 Appendix C
    #[test]
    fn matches_rfc_4122_appendix_c() {
        let cases = [
            (DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];

        for (ns, text) in cases {
            assert_eq!(Uuid::parse(text), Ok(ns));
            assert_eq!(&ns.encode() as &str, text);
            assert_eq!(ns.variant(), Variant::Rfc4122);
            assert_eq!(ns.version(), 1);
        }
    }
}
