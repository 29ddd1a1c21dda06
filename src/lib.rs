//! An implementation of RFC 4122 Universally Unique IDentifiers
//!
//! ```rust
//! use rfc4122::{namespace, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid5(&namespace::DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//!
//! let uuid = "urn:uuid:{886313E1-3B8A-5372-9B90-0C9AEE199E5D}".parse::<Uuid>()?;
//! assert_eq!(uuid.version(), 5);
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://datatracker.ietf.org/doc/html/rfc4122).
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |         time_hi_and_version   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |clk_seq_hi_res |  clk_seq_low  |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The four most significant bits of `time_hi_and_version` hold the version ([`Uuid::version`])
//! and the most significant bits of `clk_seq_hi_res` hold the variant ([`Uuid::variant`]). This
//! library generates the following versions, all with the RFC 4122 variant (`10`):
//!
//! - Version 3: MD5 hash of a namespace and a name ([`uuid3`])
//! - Version 4: random ([`uuid4`], [`V4Generator`])
//! - Version 5: SHA-1 hash of a namespace and a name ([`uuid5`])
//!
//! # Crate features
//!
//! - `std` (implied by `global_gen`): conversions from and to `String` and `Vec<u8>`.
//! - `global_gen` (default): [`uuid4`] and [`Uuid::new_v4`] backed by a thread-local generator.
//! - `serde`: serialization as the canonical string or as 16 raw bytes.
//! - `uuid`: conversions from and to [`uuid::Uuid`](https://docs.rs/uuid).
//!
//! Without `std`, the library is `no_std` and allocation-free.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compare;
mod error;
mod hash;
mod id;
mod nullable;
mod text;
mod variant;

pub mod generator;
pub mod namespace;

mod global_gen;

pub use compare::{compare, compare_all};
pub use error::{Error, Result};
pub use generator::V4Generator;
pub use hash::{uuid3, uuid5};
pub use id::Uuid;
pub use nullable::{NullUuid, ScanSource};
pub use variant::Variant;

#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;
