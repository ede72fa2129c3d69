use std::cmp::Ordering;
use std::fmt;

use crate::base::bit_length;
use crate::errors::{RadixError, RadixResult};

/// How much of its minimal binary word a value space occupies: `n / 2^bit_length(n)`.
///
/// Stored as the numerator alone; the denominator is implied. For any `n > 0`
/// the value lies in `[0.5, 1)`, with powers of two scoring exactly one half.
/// Comparison is exact.
#[derive(Debug, Clone, Copy)]
pub struct Density {
    numerator: u64,
}

impl Density {
    /// Comparison-only sentinel below every real density. Never a valid result.
    pub const ZERO: Density = Density { numerator: 0 };

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// `k` such that the denominator is `2^k`.
    pub fn denominator_log2(&self) -> u32 {
        bit_length(self.numerator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Lossy value for reporting.
    pub fn as_f64(&self) -> f64 {
        if self.numerator == 0 {
            return 0.0;
        }
        self.numerator as f64 / 2f64.powi(self.denominator_log2() as i32)
    }
}

/// Density of a non-zero value space.
pub fn density(n: u64) -> RadixResult<Density> {
    if n == 0 {
        return Err(RadixError::ZeroDensity);
    }
    Ok(Density { numerator: n })
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Density {}

impl PartialOrd for Density {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Density {
    fn cmp(&self, other: &Self) -> Ordering {
        // a / 2^ka  vs  b / 2^kb  <=>  a * 2^kb  vs  b * 2^ka; both sides < 2^128.
        let lhs = (self.numerator as u128) << other.denominator_log2();
        let rhs = (other.numerator as u128) << self.denominator_log2();
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/2^{}", self.numerator, self.denominator_log2())
    }
}
