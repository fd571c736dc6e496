//! Arbitrary-precision π digit generator built from first principles.
//!
//! Three layers, leaves first: a fixed-radix big-integer arithmetic layer
//! ([`bigint`]), a binary-splitting Chudnovsky series evaluator ([`series`]),
//! and a digit formatter ([`digits`]) that rounds the final digit correctly.
//! [`pi_digits`] wires them together:
//!
//! ```
//! assert_eq!(pi_digits::pi_digits(10).unwrap(), "3.1415926536");
//! ```
//!
//! Every computation is a pure function of the requested digit count; no
//! global precision state, no shared mutable state between invocations.

pub mod bigint;
pub mod digits;
mod error;
pub mod series;

use bigint::{BigInt, LIMB_DIGITS};
pub use error::Error;
pub use series::Observer;

/// Extra working digits carried past the requested count to absorb rounding
/// error in the series tail, the square root, and the closing division.
const GUARD_DIGITS: usize = 10;

/// Rough limb budget per working digit: the split's numerator and
/// denominator grow several decimal digits per requested digit, and the
/// multiplication buffers briefly double that.
const WORKING_SET_FACTOR: u128 = 30;

/// Immutable precision for one computation: the requested decimal digit
/// count plus the derived working precision and series term count.
///
/// Construction validates the request and preflights the working set, so a
/// hopeless digit count fails here instead of thrashing mid-computation.
#[derive(Clone, Copy, Debug)]
pub struct PrecisionRequest {
    digits: usize,
    working: usize,
    terms: usize,
}

impl PrecisionRequest {
    pub fn new(digits: usize) -> Result<Self, Error> {
        if digits < 1 {
            return Err(Error::InvalidPrecision);
        }
        preflight(digits)?;
        Ok(PrecisionRequest {
            digits,
            working: digits + GUARD_DIGITS,
            terms: digits.div_ceil(series::DIGITS_PER_TERM) + 2,
        })
    }

    /// Requested count of fractional digits.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Internal fixed-point scale, requested digits plus the guard margin.
    pub fn working_digits(&self) -> usize {
        self.working
    }

    /// Series terms to evaluate.
    pub fn terms(&self) -> usize {
        self.terms
    }
}

/// Estimates the limb working set for a digit count and refuses requests the
/// platform cannot address or the allocator cannot satisfy.
fn preflight(digits: usize) -> Result<(), Error> {
    let working = digits as u128 + GUARD_DIGITS as u128;
    let limbs = working.div_ceil(LIMB_DIGITS as u128) * WORKING_SET_FACTOR;
    if limbs > isize::MAX as u128 / std::mem::size_of::<u64>() as u128 {
        return Err(Error::ArithmeticOverflow { limbs });
    }
    let limbs = limbs as usize;
    let mut probe: Vec<u64> = Vec::new();
    probe
        .try_reserve_exact(limbs)
        .map_err(|_| Error::ResourceExhausted { limbs })?;
    Ok(())
}

/// Final output of the series stage: an integer approximating
/// π × 10^scale, tagged with the digit count it was computed for.
/// Consumed only by [`digits::render`].
#[derive(Clone, Debug)]
pub struct ComputationResult {
    pub(crate) value: BigInt,
    pub(crate) digits: usize,
    pub(crate) scale: usize,
}

impl ComputationResult {
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn scale(&self) -> usize {
        self.scale
    }
}

/// Computes `"3."` followed by exactly `digits` fractional digits of π.
pub fn pi_digits(digits: usize) -> Result<String, Error> {
    pi_digits_observed(digits, None)
}

/// [`pi_digits`] with a progress observer invoked at series-term
/// granularity. Splitting runs on the ambient rayon pool; install a
/// dedicated pool to bound parallelism.
pub fn pi_digits_observed(digits: usize, observer: Option<Observer<'_>>) -> Result<String, Error> {
    let req = PrecisionRequest::new(digits)?;
    let result = series::evaluate(&req, observer)?;
    digits::render(&result)
}
