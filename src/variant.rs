//! Variant and version fields

use crate::Uuid;

/// The variant field of a UUID, stored in the most significant bits of byte 8.
///
/// Each variant corresponds to the tag byte defined in RFC 4122 section 4.1.1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (`0xx`).
    Ncs,

    /// The layout specified by RFC 4122 (`10x`).
    Rfc4122,

    /// Reserved for Microsoft backward compatibility (`110`).
    Microsoft,

    /// Reserved for future definition (`111`).
    Future,
}

impl Variant {
    /// Returns the tag byte of the variant.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Ncs => 0x80,
            Self::Rfc4122 => 0x40,
            Self::Microsoft => 0x20,
            Self::Future => 0x00,
        }
    }

    /// Returns the variant identified by a tag byte, or `None` for an unrecognized value.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x80 => Some(Self::Ncs),
            0x40 => Some(Self::Rfc4122),
            0x20 => Some(Self::Microsoft),
            0x00 => Some(Self::Future),
            _ => None,
        }
    }
}

impl Uuid {
    /// Reports the variant field value of the UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{namespace, Uuid, Variant};
    ///
    /// assert_eq!(Uuid::NIL.variant(), Variant::Ncs);
    /// assert_eq!(namespace::DNS.variant(), Variant::Rfc4122);
    /// assert_eq!(Uuid::MAX.variant(), Variant::Future);
    /// ```
    pub const fn variant(&self) -> Variant {
        let b = self.as_bytes()[8];
        if b >> 7 == 0b0 {
            Variant::Ncs
        } else if b >> 6 == 0b10 {
            Variant::Rfc4122
        } else if b >> 5 == 0b110 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }

    /// Overwrites the variant bits of byte 8, preserving the remaining lower bits.
    ///
    /// The written pattern always reads back as `variant` through [`Uuid::variant`].
    pub fn set_variant(&mut self, variant: Variant) {
        let b = &mut self.as_mut_bytes()[8];
        *b = match variant {
            Variant::Ncs => *b & 0x7f,
            Variant::Rfc4122 => (*b & 0x3f) | 0x80,
            Variant::Microsoft => (*b & 0x1f) | 0xc0,
            Variant::Future => (*b & 0x1f) | 0xe0,
        };
    }

    /// Overwrites the variant bits from a raw tag byte (see [`Variant::tag`]).
    ///
    /// Unrecognized tags leave the UUID unchanged.
    pub fn set_variant_tag(&mut self, tag: u8) {
        if let Some(variant) = Variant::from_tag(tag) {
            self.set_variant(variant);
        }
    }

    /// Returns the version field value (the high nibble of byte 6) as a number from 0 to 15.
    ///
    /// The number is only meaningful when [`Uuid::variant`] reports [`Variant::Rfc4122`].
    pub const fn version(&self) -> u8 {
        self.as_bytes()[6] >> 4
    }

    /// Stores `version` in the high nibble of byte 6, preserving the low nibble.
    ///
    /// # Panics
    ///
    /// Panics if `version` does not fit in four bits.
    pub fn set_version(&mut self, version: u8) {
        assert!(version < 16, "`version` must be a 4-bit integer");
        let b = &mut self.as_mut_bytes()[6];
        *b = (*b & 0x0f) | (version << 4);
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    fn with_byte(index: usize, value: u8) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[index] = value;
        Uuid::from(bytes)
    }

    /// Reports variant from top bits of byte 8
    #[test]
    fn reports_variant_from_top_bits_of_byte_8() {
        for b in 0..=255u8 {
            let expected = match b {
                0x00..=0x7f => Variant::Ncs,
                0x80..=0xbf => Variant::Rfc4122,
                0xc0..=0xdf => Variant::Microsoft,
                0xe0..=0xff => Variant::Future,
            };
            assert_eq!(with_byte(8, b).variant(), expected, "byte 8 = {:#04x}", b);
        }
    }

    /// Sets variant bits preserving lower bits
    #[test]
    fn sets_variant_bits_preserving_lower_bits() {
        for b in 0..=255u8 {
            let mut e = with_byte(8, b);
            e.set_variant(Variant::Ncs);
            assert_eq!(e.as_bytes()[8], b & 0x7f);
            assert_eq!(e.variant(), Variant::Ncs);

            let mut e = with_byte(8, b);
            e.set_variant(Variant::Rfc4122);
            assert_eq!(e.as_bytes()[8], 0x80 | (b & 0x3f));
            assert_eq!(e.variant(), Variant::Rfc4122);

            let mut e = with_byte(8, b);
            e.set_variant(Variant::Microsoft);
            assert_eq!(e.as_bytes()[8], 0xc0 | (b & 0x1f));
            assert_eq!(e.variant(), Variant::Microsoft);

            let mut e = with_byte(8, b);
            e.set_variant(Variant::Future);
            assert_eq!(e.as_bytes()[8], 0xe0 | (b & 0x1f));
            assert_eq!(e.variant(), Variant::Future);
        }
    }

    /// Ignores unrecognized tags
    #[test]
    fn ignores_unrecognized_tags() {
        for b in [0x00u8, 0x3c, 0x9a, 0xff] {
            let mut e = with_byte(8, b);
            for tag in [0x01u8, 0x10, 0x41, 0xc0, 0xff] {
                e.set_variant_tag(tag);
                assert_eq!(e, with_byte(8, b));
            }
        }
    }

    /// Maps tags to variants and back
    #[test]
    fn maps_tags_to_variants_and_back() {
        for v in [
            Variant::Ncs,
            Variant::Rfc4122,
            Variant::Microsoft,
            Variant::Future,
        ] {
            assert_eq!(Variant::from_tag(v.tag()), Some(v));

            let mut e = with_byte(8, 0x5a);
            e.set_variant_tag(v.tag());
            assert_eq!(e.variant(), v);
        }
    }

    /// Writes documented patterns for raw tags
    #[test]
    fn writes_documented_patterns_for_raw_tags() {
        let mut e = with_byte(8, 0x9b);
        e.set_variant_tag(0x40);
        assert_eq!(e.as_bytes()[8], 0x9b);

        let mut e = with_byte(8, 0x12);
        e.set_variant_tag(0x00);
        assert_eq!(e.as_bytes()[8], 0xf2);
        assert_eq!(e.variant(), Variant::Future);

        let mut e = with_byte(8, 0x12);
        e.set_variant_tag(0x40);
        assert_eq!(e.as_bytes()[8], 0x92);

        let mut e = with_byte(8, 0xd2);
        e.set_variant_tag(0x80);
        assert_eq!(e.as_bytes()[8], 0x52);

        let mut e = with_byte(8, 0x12);
        e.set_variant_tag(0x20);
        assert_eq!(e.as_bytes()[8], 0xd2);
    }

    /// Sets and reads version nibble of byte 6
    #[test]
    fn sets_and_reads_version_nibble_of_byte_6() {
        for b in [0x00u8, 0x0f, 0xa5, 0xff] {
            for v in 0..16u8 {
                let mut e = with_byte(6, b);
                e.set_version(v);
                assert_eq!(e.version(), v);
                assert_eq!(e.as_bytes()[6] & 0x0f, b & 0x0f);
            }
        }
    }

    /// Panics on version wider than four bits
    #[test]
    #[should_panic]
    fn panics_on_version_wider_than_four_bits() {
        let mut e = Uuid::NIL;
        e.set_version(16);
    }
}
