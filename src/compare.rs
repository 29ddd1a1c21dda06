//! Equality helpers over byte contents

use crate::Uuid;

impl Uuid {
    /// Returns `true` if both UUIDs hold the same 16 bytes. Equivalent to `==`.
    pub fn equal(&self, other: &Uuid) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Returns `true` if `a` and `b` hold the same 16 bytes.
pub fn compare(a: &Uuid, b: &Uuid) -> bool {
    a.equal(b)
}

/// Returns `true` if every UUID in `uuids` is byte-equal to the first one.
///
/// # Panics
///
/// Panics if `uuids` is empty.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{compare_all, namespace};
///
/// assert!(compare_all(&[namespace::DNS, namespace::DNS]));
/// assert!(!compare_all(&[namespace::DNS, namespace::DNS, namespace::URL]));
/// ```
pub fn compare_all(uuids: &[Uuid]) -> bool {
    let (first, rest) = uuids
        .split_first()
        .expect("`uuids` must contain at least one element");
    rest.iter().all(|e| first.equal(e))
}

#[cfg(test)]
mod tests {
    use super::{compare, compare_all};
    use crate::{namespace, Uuid};

    /// Compares byte contents
    #[test]
    fn compares_byte_contents() {
        let a = Uuid::from_u128(0xefb65913_a881_4006_bce4_9fc33be32ddd);
        let b = Uuid::from_slice(a.as_bytes()).unwrap();
        assert!(compare(&a, &b));
        assert!(a.equal(&b));
        assert!(!compare(&a, &Uuid::NIL));
        assert!(!Uuid::NIL.equal(&Uuid::MAX));
    }

    /// Reports whether all elements equal first
    #[test]
    fn reports_whether_all_elements_equal_first() {
        let ns = namespace::OID;
        assert!(compare_all(&[ns]));
        assert!(compare_all(&[ns; 8]));

        for i in 0..8 {
            let mut uuids = [ns; 8];
            uuids[i] = namespace::X500;
            assert!(!compare_all(&uuids), "differing element at {}", i);
        }
    }

    /// Panics on empty sequence
    #[test]
    #[should_panic]
    fn panics_on_empty_sequence() {
        compare_all(&[]);
    }
}
