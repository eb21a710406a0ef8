//! Error types for the bounded read operations.

use crate::size::ByteSize;
use std::io;
use thiserror::Error;

/// Errors produced by the bounded read operations.
///
/// Variants that interrupt a read in progress carry the bytes accumulated
/// before the interruption; [`Error::into_bytes`] recovers them.
#[derive(Debug, Error)]
pub enum Error {
    /// The source produced more bytes than the configured limit.
    ///
    /// `bytes` is a prefix of the data read, of length exactly the limit.
    /// Match on this variant (or use [`Error::is_limit_reached`]) to test
    /// for the condition; the message text varies with the limit value.
    #[error("read limit reached: limit is {limit}")]
    LimitReached {
        /// The limit that was exceeded.
        limit: ByteSize,
        /// A length-`limit` prefix of everything read.
        bytes: Vec<u8>,
    },

    /// The source failed with something other than end-of-stream.
    ///
    /// The original error is preserved unmodified as the source of this
    /// one, so callers can inspect the root cause.
    #[error("read failed after {} bytes", .bytes.len())]
    Io {
        /// The bytes successfully accumulated before the failure.
        bytes: Vec<u8>,
        /// The original error, unchanged.
        #[source]
        source: io::Error,
    },

    /// The limit was negative or not finite. Rejected before any read.
    #[error("invalid read limit: {limit:?}")]
    InvalidLimit {
        /// The rejected limit.
        limit: ByteSize,
    },
}

impl Error {
    /// True when this error is the limit-reached condition, regardless of
    /// the formatted limit in the message.
    pub fn is_limit_reached(&self) -> bool {
        matches!(self, Error::LimitReached { .. })
    }

    /// Borrows the bytes accumulated before the error.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Error::LimitReached { bytes, .. } | Error::Io { bytes, .. } => bytes,
            Error::InvalidLimit { .. } => &[],
        }
    }

    /// Consumes the error and returns the bytes accumulated before it.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Error::LimitReached { bytes, .. } | Error::Io { bytes, .. } => bytes,
            Error::InvalidLimit { .. } => Vec::new(),
        }
    }
}

/// Result type alias for bounded read operations.
pub type Result<T> = std::result::Result<T, Error>;
