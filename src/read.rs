//! Bounded read-to-completion.
//!
//! [`read_all_limit`] consumes a [`Read`] source until end-of-stream but
//! never retains more than a caller-supplied number of bytes, protecting
//! the process from unbounded memory growth when the source is untrusted
//! or simply larger than expected. [`BoundedReader`] is the quieter
//! sibling: a `Read` adapter that caps the byte count and reports EOF at
//! the cap instead of erroring.

use crate::error::{Error, Result};
use crate::size::ByteSize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, trace, warn};

/// First allocation for the accumulation buffer, when the limit allows it.
const INITIAL_CHUNK: usize = 512;

/// Validates a limit and converts it to whole bytes.
///
/// Negative and non-finite limits are rejected up front; fractional
/// limits are floored.
fn checked_limit(limit: ByteSize) -> Result<usize> {
    let raw = limit.get();
    if !raw.is_finite() || raw < 0.0 {
        return Err(Error::InvalidLimit { limit });
    }
    Ok(raw as usize)
}

/// Reads from `reader` until end-of-stream, retaining at most `limit`
/// bytes.
///
/// A successful call returns every byte the source produced, in order;
/// end-of-stream is not an error. If the source produces more than
/// `limit` bytes the call stops and returns [`Error::LimitReached`]
/// carrying a prefix of length exactly `limit` — a source that produces
/// exactly `limit` bytes and then EOF succeeds. Any other failure from
/// the source ends the call immediately with [`Error::Io`], carrying the
/// bytes accumulated so far and the original error unchanged.
///
/// The call is synchronous and holds no state beyond its own buffer;
/// timeouts and cancellation belong to the source (closing it makes the
/// next pull fail, which surfaces as `Error::Io`).
///
/// # Examples
///
/// ```
/// use safeio::{read_all_limit, ByteSize};
/// use std::io::Cursor;
///
/// let mut src = Cursor::new(b"hello".to_vec());
/// let data = read_all_limit(&mut src, ByteSize::KB)?;
/// assert_eq!(data, b"hello");
/// # Ok::<(), safeio::Error>(())
/// ```
pub fn read_all_limit<R: Read>(reader: &mut R, limit: ByteSize) -> Result<Vec<u8>> {
    let max = checked_limit(limit)?;

    // Small first chunk so a tiny limit does not over-allocate. The
    // vector stays at full physical length and `total` tracks how much
    // of it holds data, so the tail is zeroed once per growth rather
    // than once per pull.
    let mut buf: Vec<u8> = vec![0u8; max.min(INITIAL_CHUNK)];
    let mut total: usize = 0;

    loop {
        if total == buf.len() {
            // Vec::reserve grows amortized-geometrically (at least
            // doubling); the exact amount is its call.
            buf.reserve(1);
            buf.resize(buf.capacity(), 0);
        }

        match reader.read(&mut buf[total..]) {
            Ok(0) => {
                buf.truncate(total);
                debug!(total, "source exhausted");
                return Ok(buf);
            }
            Ok(n) => {
                total += n;
                trace!(pulled = n, total, "pull");
                if total > max {
                    warn!(limit = %limit, total, "read limit reached");
                    buf.truncate(max);
                    return Err(Error::LimitReached { limit, bytes: buf });
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                buf.truncate(total);
                return Err(Error::Io {
                    bytes: buf,
                    source: e,
                });
            }
        }
    }
}

/// Reads an entire file through [`read_all_limit`].
///
/// Open failures surface as [`Error::Io`] with no accumulated bytes.
pub fn read_file_limit<P: AsRef<Path>>(path: P, limit: ByteSize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    debug!(path = %path.display(), limit = %limit, "bounded file read");
    let mut file = File::open(path).map_err(|e| Error::Io {
        bytes: Vec::new(),
        source: e,
    })?;
    read_all_limit(&mut file, limit)
}

/// A `Read` adapter that serves at most `limit` bytes.
///
/// Once the cap is reached every subsequent read reports EOF; no error is
/// raised. Use [`read_all_limit`] when exceeding the cap should be
/// detectable.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    /// Wraps `inner`, capping reads at `limit` bytes total.
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            bytes_read: 0,
            limit,
        }
    }

    /// Total bytes served so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// The configured cap.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Unwraps the adapter, returning the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes_read >= self.limit {
            trace!(limit = self.limit, "bounded reader at cap");
            return Ok(0);
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;

        if self.bytes_read >= self.limit {
            debug!(bytes_read = self.bytes_read, "bounded reader reached cap");
        }

        Ok(n)
    }
}
