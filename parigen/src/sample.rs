//! Random bit patterns of exact significant length with a fixed popcount
//! parity.
//!
//! A sample is built in one bounded unit of work: draw `ceil(n / 8)` bytes
//! from the caller's generator, force the value to occupy exactly `n`
//! significant bits, then repair the popcount parity by clearing the lowest
//! set bit if needed. The entropy source is injected and its failures
//! propagate unmasked; nothing here retries or substitutes randomness.

use core::fmt;

use bitprim::cleared_lowest_set_bit;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use crate::Parity;

/// Error returned by [`random_odd`] and [`random_even`].
#[derive(Debug)]
pub enum SampleError {
    /// The requested parity cannot be met at the requested length. A
    /// zero-length pattern has popcount zero, which is even.
    UnsatisfiableParity { bit_length: usize, parity: Parity },
    /// The entropy source failed to produce bytes.
    EntropySource(rand::Error),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::UnsatisfiableParity { bit_length, parity } => {
                write!(f, "no {bit_length}-bit pattern has {parity} popcount")
            }
            SampleError::EntropySource(error) => write!(f, "entropy source failed: {error}"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::EntropySource(error) => Some(error),
            SampleError::UnsatisfiableParity { .. } => None,
        }
    }
}

impl From<rand::Error> for SampleError {
    fn from(error: rand::Error) -> SampleError {
        SampleError::EntropySource(error)
    }
}

/// Random pattern with odd popcount whose highest set bit sits at position
/// `bit_length - 1`, so the value lies in `[2^(bit_length-1), 2^bit_length)`.
///
/// # Errors
///
/// [`SampleError::UnsatisfiableParity`] when `bit_length` is zero (no
/// zero-length pattern has odd popcount), or [`SampleError::EntropySource`]
/// if `rng` fails to deliver bytes.
pub fn random_odd<R: RngCore + ?Sized>(bit_length: usize, rng: &mut R) -> Result<BigUint, SampleError> {
    if bit_length == 0 {
        return Err(SampleError::UnsatisfiableParity {
            bit_length,
            parity: Parity::Odd,
        });
    }
    let mut pattern = random_exact_length(bit_length, rng)?;
    if Parity::of(&pattern) != Parity::Odd {
        pattern = cleared_lowest_set_bit(&pattern);
        if pattern.is_zero() {
            pattern = BigUint::one();
        }
    }
    Ok(pattern)
}

/// Random pattern with even popcount whose highest set bit sits at position
/// `bit_length - 1`.
///
/// Parity repair clears the lowest set bit; when that empties the pattern
/// and `allow_zero` is false, the minimal non-zero even pattern 3 is
/// substituted instead, relaxing the exact-length guarantee for that draw.
///
/// At `bit_length` zero the flag behaves the opposite of what its name
/// suggests, and deliberately so: `allow_zero = false` returns 0 (popcount
/// trivially even) while `allow_zero = true` returns 3. Callers rely on
/// this behavior; do not "fix" it.
///
/// # Errors
///
/// [`SampleError::EntropySource`] if `rng` fails to deliver bytes.
pub fn random_even<R: RngCore + ?Sized>(
    bit_length: usize,
    rng: &mut R,
    allow_zero: bool,
) -> Result<BigUint, SampleError> {
    if bit_length == 0 {
        if allow_zero {
            return Ok(BigUint::from(3u32));
        }
        return Ok(BigUint::zero());
    }
    let mut pattern = random_exact_length(bit_length, rng)?;
    if Parity::of(&pattern) != Parity::Even {
        pattern = cleared_lowest_set_bit(&pattern);
        if !allow_zero && pattern.is_zero() {
            pattern = BigUint::from(3u32);
        }
    }
    Ok(pattern)
}

/// Uniform draw over `[2^(bit_length-1), 2^bit_length)`: `ceil(bit_length / 8)`
/// little-endian bytes with a leading one forced into the top byte, then
/// shifted down so the highest set bit lands at `bit_length - 1`.
fn random_exact_length<R: RngCore + ?Sized>(bit_length: usize, rng: &mut R) -> Result<BigUint, SampleError> {
    debug_assert!(bit_length > 0);
    let mut bytes = vec![0u8; bit_length.div_ceil(8)];
    rng.try_fill_bytes(&mut bytes)?;
    let top = bytes.len() - 1;
    bytes[top] = (0x80 | bytes[top]) >> (7 - (bit_length - 1) % 8);
    Ok(BigUint::from_bytes_le(&bytes))
}
