//! Generation of bit patterns constrained by popcount parity.
//!
//! Two generators share the invariant "popcount mod 2 over a declared
//! width": [`enumerate`] walks every pattern of a width with the requested
//! parity, lazily; [`sample`] draws a single random pattern of an exact
//! significant bit length and corrects its parity.

use core::fmt;
use core::ops::Not;

use bitprim::Bitwise;
use num_bigint::BigUint;

pub mod enumerate;
pub mod sample;
#[cfg(test)]
pub(crate) mod statistical_testing;

pub use enumerate::{all_even, all_odd, pattern_count, ParityPatterns};
pub use sample::{random_even, random_odd, SampleError};

/// Popcount parity of a bit pattern.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of `pattern`'s popcount.
    #[must_use]
    pub fn of(pattern: &BigUint) -> Parity {
        if pattern.parity() {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    /// Whether `pattern`'s popcount has this parity.
    #[must_use]
    pub fn matches(self, pattern: &BigUint) -> bool {
        Parity::of(pattern) == self
    }

    pub fn all() -> impl Iterator<Item = Parity> + Clone {
        [Parity::Even, Parity::Odd].into_iter()
    }
}

impl Not for Parity {
    type Output = Parity;

    fn not(self) -> Parity {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}
