//! Text representations
//!
//! [`Uuid::encode`] and the [`Display`](fmt::Display) implementation always produce the 8-4-4-4-12
//! canonical form in lowercase. Parsing comes in two strengths:
//!
//! - [`Uuid::parse`] (also used by [`FromStr`](str::FromStr)) is lenient and accepts braces, the
//!   `urn:uuid:` prefix, and the 32-digit form without hyphens in any combination. It only accepts
//!   versions 1 through 5.
//! - [`Uuid::parse_canonical`] accepts exactly the 36-character hyphenated form of any UUID.

#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::{Error, Result, Uuid};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

const URN_PREFIX: &[u8; 9] = b"urn:uuid:";

/// Substrings removed by the lenient parser wherever they appear.
const DECORATIONS: [&[u8]; 5] = [b"urn", b":", b"uuid", b"{", b"}"];

/// Offsets of hyphens in the canonical form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

impl Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation stored in a
    /// stack-allocated string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "{EFB65913-A881-4006-BCE4-9FC33BE32DDD}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "efb65913-a881-4006-bce4-9fc33be32ddd");
    /// assert_eq!(format!("{}", y), "efb65913-a881-4006-bce4-9fc33be32ddd");
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in self.as_bytes().iter().enumerate() {
            *buf_iter.next().unwrap() = DIGITS[(e >> 4) as usize];
            *buf_iter.next().unwrap() = DIGITS[(e & 15) as usize];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Returns the URN representation (`urn:uuid:` followed by the canonical form, 45 characters
    /// in total).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::namespace;
    ///
    /// assert_eq!(
    ///     &namespace::URL.urn() as &str,
    ///     "urn:uuid:6ba7b811-9dad-11d1-80b4-00c04fd430c8"
    /// );
    /// ```
    pub fn urn(&self) -> FStr<45> {
        let mut buffer = [0u8; 45];
        let (prefix, body) = buffer.split_at_mut(URN_PREFIX.len());
        prefix.copy_from_slice(URN_PREFIX);
        body.copy_from_slice(self.encode().as_bytes());
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII characters only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Creates a UUID from any of the accepted text representations.
    ///
    /// The literal substrings `urn`, `:`, `uuid`, `{`, and `}` are removed first (ASCII
    /// case-insensitively), so braces and the URN prefix may appear in any combination. The
    /// remainder must be either 32 hexadecimal digits or the 8-4-4-4-12 hyphenated form, and the
    /// version digit (the first of the third group) must be `1` through `5`. Hexadecimal digits
    /// are accepted in either case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedText`] if the input does not fit any of these forms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = Uuid::parse("efb65913-a881-4006-bce4-9fc33be32ddd")?;
    /// assert_eq!(Uuid::parse("efb65913a8814006bce49fc33be32ddd")?, x);
    /// assert_eq!(Uuid::parse("{efb65913-a881-4006-bce4-9fc33be32ddd}")?, x);
    /// assert_eq!(Uuid::parse("urn:uuid:efb65913-a881-4006-bce4-9fc33be32ddd")?, x);
    /// assert!(Uuid::parse("not-a-uuid").is_err());
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self> {
        let result = strip_decorations(src.as_bytes())
            .and_then(|(buffer, len)| insert_hyphens(&buffer[..len]))
            .and_then(|canonical| {
                if (b'1'..=b'5').contains(&canonical[14]) {
                    decode_canonical(&canonical)
                } else {
                    Err(Error::MalformedText)
                }
            });
        if result.is_err() {
            log::trace!("rejected uuid text {:?}", src);
        }
        result
    }

    /// Creates a UUID from the 8-4-4-4-12 hexadecimal string representation only.
    ///
    /// Unlike [`Uuid::parse`], this function accepts no decorations but places no restriction on
    /// the version digit, so that the Nil and Max UUIDs round-trip.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedText`] if the input is not in the canonical form.
    pub fn parse_canonical(src: &str) -> Result<Self> {
        decode_canonical(src.as_bytes())
    }

    /// Normalizes any text accepted by [`Uuid::parse`] to the canonical form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let s = Uuid::format("urn:uuid:EFB65913A8814006BCE49FC33BE32DDD")?;
    /// assert_eq!(&s as &str, "efb65913-a881-4006-bce4-9fc33be32ddd");
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn format(src: &str) -> Result<FStr<36>> {
        Self::parse(src).map(|e| e.encode())
    }
}

/// Removes decorations from `src` in a single left-to-right pass, returning the remaining
/// characters in a fixed buffer.
fn strip_decorations(src: &[u8]) -> Result<([u8; 36], usize)> {
    let mut buffer = [0u8; 36];
    let mut len = 0;
    let mut rest = src;
    'outer: while let Some((&c, tail)) = rest.split_first() {
        for d in DECORATIONS {
            if rest.len() >= d.len() && rest[..d.len()].eq_ignore_ascii_case(d) {
                rest = &rest[d.len()..];
                continue 'outer;
            }
        }
        *buffer.get_mut(len).ok_or(Error::MalformedText)? = c;
        len += 1;
        rest = tail;
    }
    Ok((buffer, len))
}

/// Expands the 32-digit form into the hyphenated layout; passes 36-character input through.
fn insert_hyphens(src: &[u8]) -> Result<[u8; 36]> {
    match src.len() {
        36 => {
            let mut dst = [0u8; 36];
            dst.copy_from_slice(src);
            Ok(dst)
        }
        32 => {
            let mut dst = [b'-'; 36];
            let slots = dst
                .iter_mut()
                .enumerate()
                .filter(|(i, _)| !HYPHENS.contains(i))
                .map(|(_, e)| e);
            for (e, c) in slots.zip(src) {
                *e = *c;
            }
            Ok(dst)
        }
        _ => Err(Error::MalformedText),
    }
}

/// Decodes the 8-4-4-4-12 form.
fn decode_canonical(src: &[u8]) -> Result<Uuid> {
    const ERR: Error = Error::MalformedText;
    let digit = |c: Option<&u8>| {
        c.and_then(|&c| char::from(c).to_digit(16))
            .map(|d| d as u8)
            .ok_or(ERR)
    };

    let mut dst = [0u8; 16];
    let mut iter = src.iter();
    for (i, e) in dst.iter_mut().enumerate() {
        let hi = digit(iter.next())?;
        let lo = digit(iter.next())?;
        *e = (hi << 4) | lo;
        if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next() != Some(&b'-') {
            return Err(ERR);
        }
    }
    if iter.next().is_none() {
        Ok(Uuid::from(dst))
    } else {
        Err(ERR)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from any text representation accepted by [`Uuid::parse`].
    fn from_str(src: &str) -> Result<Self> {
        Self::parse(src)
    }
}
