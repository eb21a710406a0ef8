//! Byte-count magnitudes for read limits and diagnostics.
//!
//! [`ByteSize`] is the value type used both as the limit argument of the
//! bounded read operations and as the human-readable rendering of that
//! limit in log and error text.

use std::fmt;

/// A count of bytes.
///
/// The named constants form a geometric sequence with ratio 1024, from
/// [`ByteSize::KB`] through [`ByteSize::YB`]. `Display` picks the largest
/// unit the value reaches and emits one decimal digit (`1.5KB`,
/// `1023.0B`). The rendering is lossy and intended for display only;
/// never compare formatted strings.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ByteSize(f64);

impl ByteSize {
    /// One kilobyte (1024 bytes).
    pub const KB: ByteSize = ByteSize(1024.0);
    /// One megabyte.
    pub const MB: ByteSize = ByteSize(Self::KB.0 * 1024.0);
    /// One gigabyte.
    pub const GB: ByteSize = ByteSize(Self::MB.0 * 1024.0);
    /// One terabyte.
    pub const TB: ByteSize = ByteSize(Self::GB.0 * 1024.0);
    /// One petabyte.
    pub const PB: ByteSize = ByteSize(Self::TB.0 * 1024.0);
    /// One exabyte.
    pub const EB: ByteSize = ByteSize(Self::PB.0 * 1024.0);
    /// One zettabyte.
    pub const ZB: ByteSize = ByteSize(Self::EB.0 * 1024.0);
    /// One yottabyte.
    pub const YB: ByteSize = ByteSize(Self::ZB.0 * 1024.0);

    // Evaluated largest to smallest so formatting picks the biggest unit
    // the value reaches.
    const UNITS: [(f64, &'static str); 8] = [
        (Self::YB.0, "YB"),
        (Self::ZB.0, "ZB"),
        (Self::EB.0, "EB"),
        (Self::PB.0, "PB"),
        (Self::TB.0, "TB"),
        (Self::GB.0, "GB"),
        (Self::MB.0, "MB"),
        (Self::KB.0, "KB"),
    ];

    /// Creates a size from a raw byte count.
    pub const fn new(bytes: f64) -> Self {
        ByteSize(bytes)
    }

    /// Returns the raw byte count.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        ByteSize(bytes as f64)
    }
}

impl From<f64> for ByteSize {
    fn from(bytes: f64) -> Self {
        ByteSize(bytes)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (threshold, suffix) in Self::UNITS {
            if self.0 >= threshold {
                return write!(f, "{:.1}{}", self.0 / threshold, suffix);
            }
        }
        write!(f, "{:.1}B", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_powers_of_1024() {
        let mut prev = 1.0;
        for (threshold, _) in ByteSize::UNITS.iter().rev() {
            assert_eq!(*threshold, prev * 1024.0);
            prev = *threshold;
        }
    }

    #[test]
    fn formats_raw_bytes_below_one_kilobyte() {
        assert_eq!(ByteSize::from(0u64).to_string(), "0.0B");
        assert_eq!(ByteSize::from(1u64).to_string(), "1.0B");
        assert_eq!(ByteSize::from(1023u64).to_string(), "1023.0B");
    }

    #[test]
    fn formats_each_unit_boundary() {
        assert_eq!(ByteSize::from(1024u64).to_string(), "1.0KB");
        assert_eq!(ByteSize::from(1_048_576u64).to_string(), "1.0MB");
        assert_eq!(ByteSize::GB.to_string(), "1.0GB");
        assert_eq!(ByteSize::TB.to_string(), "1.0TB");
        assert_eq!(ByteSize::PB.to_string(), "1.0PB");
        assert_eq!(ByteSize::EB.to_string(), "1.0EB");
        assert_eq!(ByteSize::ZB.to_string(), "1.0ZB");
        assert_eq!(ByteSize::YB.to_string(), "1.0YB");
    }

    #[test]
    fn formats_fractional_magnitudes() {
        assert_eq!(ByteSize::from(1536u64).to_string(), "1.5KB");
        assert_eq!(ByteSize::new(2.5 * ByteSize::MB.get()).to_string(), "2.5MB");
    }

    #[test]
    fn formatted_output_matches_expected_shape() {
        // ^\d+\.\d[KMGTPEZY]?B$
        for v in [0u64, 7, 1023, 1024, 4096, 1_048_576, 5_000_000_000] {
            let s = ByteSize::from(v).to_string();
            let (digits, rest) = s.split_at(s.find('.').unwrap());
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            assert!(rest.len() == 3 || rest.len() == 4);
            assert!(rest.ends_with('B'));
        }
    }
}
