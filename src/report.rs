//! Size statistics printed after a successful run.

use std::fmt;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Before/after sizes of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeReport {
    pub original_bytes: u64,
    pub new_bytes: u64,
    pub records: usize,
}

impl SizeReport {
    pub fn to_mb(bytes: u64) -> f64 {
        bytes as f64 / BYTES_PER_MB
    }

    pub fn original_mb(&self) -> f64 {
        Self::to_mb(self.original_bytes)
    }

    pub fn new_mb(&self) -> f64 {
        Self::to_mb(self.new_bytes)
    }

    /// Share of the original size saved, in percent. 0 for an empty input.
    pub fn reduction_pct(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            (1.0 - self.new_bytes as f64 / self.original_bytes as f64) * 100.0
        }
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Optimization complete. Original size: {:.2}MB",
            self.original_mb()
        )?;
        write!(f, "New size: {:.2}MB", self.new_mb())
    }
}
