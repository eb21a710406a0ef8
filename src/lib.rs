//! Safe, bounded I/O primitives.
//!
//! The core of this crate is [`read_all_limit`]: a read-to-completion
//! that consumes any [`std::io::Read`] source until end-of-stream but
//! never retains more than a caller-supplied [`ByteSize`] limit. It
//! protects the process from unbounded memory growth when the source is
//! untrusted, adversarial, or simply larger than expected (an HTTP body,
//! a file, a pipe).
//!
//! On overrun the call returns [`Error::LimitReached`] carrying a prefix
//! of exactly the limit's length and a message with the formatted limit
//! (`read limit reached: limit is 1.0KB`). Underlying read failures pass
//! through unchanged; end-of-stream is never an error.
//!
//! ```
//! use safeio::{read_all_limit, ByteSize};
//! use std::io::Cursor;
//!
//! let mut body = Cursor::new(vec![0u8; 2048]);
//! let err = read_all_limit(&mut body, ByteSize::KB).unwrap_err();
//! assert!(err.is_limit_reached());
//! assert_eq!(err.bytes().len(), 1024);
//! ```
//!
//! Timeouts, cancellation, and retries are deliberately out of scope:
//! they belong to the source. Cancelling a read means closing the source
//! so its next pull fails.

pub mod error;
pub mod logging;
pub mod read;
pub mod size;

pub use error::{Error, Result};
pub use read::{read_all_limit, read_file_limit, BoundedReader};
pub use size::ByteSize;
