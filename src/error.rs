//! Error type shared by the parsers and generators

/// Error returned when a UUID cannot be constructed from its input.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// Raw binary input was not exactly 16 bytes long.
    #[error("uuid must be 16 bytes, got {len}")]
    LengthMismatch {
        /// Length of the rejected input.
        len: usize,
    },

    /// Text input does not match any accepted UUID representation.
    #[error("invalid string representation")]
    MalformedText,

    /// Name-based generation was invoked without a namespace.
    #[error("namespace missing")]
    NilNamespace,
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
