//! Chudnovsky series evaluation by binary splitting.
//!
//! Each series term contributes about 14.18 correct decimal digits. The
//! splitting recursion combines partial (P, Q, G) triples so the total work
//! is a logarithmic number of multiplications at full size instead of a
//! linear pass, and sibling subtrees never alias, so they fork and join
//! freely on the ambient rayon pool.

use tracing::debug;

use crate::bigint::BigInt;
use crate::error::Error;
use crate::{ComputationResult, PrecisionRequest};

const A: u64 = 13_591_409;
const B: u64 = 545_140_134;
const C: u64 = 640_320;
const D: u64 = 12;
/// 640320^3 / 24, the per-term factor of P.
const C3_OVER_24: u64 = 10_939_058_860_032_000;

/// Guaranteed whole digits contributed per series term (the true rate is
/// 14.18..., so dividing by 14 always over-provisions terms).
pub(crate) const DIGITS_PER_TERM: usize = 14;

/// Ranges at least this long are split across the rayon pool; shorter ones
/// recurse sequentially on the current worker.
const FORK_THRESHOLD: usize = 128;

/// Extra digits kept when the final numerator and denominator are cut down
/// to quotient size before the closing division.
const TRUNC_MARGIN: usize = 16;

/// Progress callback, invoked with the number of newly finished series
/// terms. Invocation order under a parallel pool is unspecified; the
/// computed value never depends on it.
pub type Observer<'a> = &'a (dyn Fn(usize) + Sync);

struct Terms {
    p: BigInt,
    q: BigInt,
    g: BigInt,
}

/// Evaluates π scaled by 10^working as a single integer.
pub fn evaluate(
    req: &PrecisionRequest,
    observer: Option<Observer<'_>>,
) -> Result<ComputationResult, Error> {
    let n = req.terms();
    let scale = req.working_digits();

    let Terms { p, q, .. } = split(0, n, observer);
    debug!(terms = n, "binary splitting done");

    //        P * (C/D) * sqrt(C)
    // pi = ----------------------
    //            Q + A * P
    let q = &q + &(&p * A);
    let p = &p * (C / D);
    let sqrt_c = BigInt::from(C).sqrt_scaled(scale)?;
    debug!("square root done");

    let num = &p * &sqrt_c;
    // num/q is only scale+1 digits long while both operands carry several
    // digits per series term; dropping their common low digits keeps the
    // closing division near-linear without moving the quotient by more
    // than one unit in the last guard digit
    let cut = q.decimal_digits().saturating_sub(scale + TRUNC_MARGIN);
    let (value, _) = num.shr_digits(cut).div_rem(&q.shr_digits(cut))?;
    debug!("final division done");

    Ok(ComputationResult {
        value,
        digits: req.digits(),
        scale,
    })
}

fn split(a: usize, b: usize, observer: Option<Observer<'_>>) -> Terms {
    debug_assert!(b > a);
    if b - a == 1 {
        let t = leaf(b);
        if let Some(notify) = observer {
            notify(1);
        }
        return t;
    }
    // the right half's terms are larger; bias the midpoint to balance work
    let m = (a + ((b - a) as f64 * 0.5224) as usize).clamp(a + 1, b - 1);
    let (left, right) = if b - a >= FORK_THRESHOLD {
        rayon::join(|| split(a, m, observer), || split(m, b, observer))
    } else {
        (split(a, m, observer), split(m, b, observer))
    };
    merge(left, right)
}

/// Single-term triple:
///   G(b-1,b) = (6b-5)(2b-1)(6b-1)
///   P(b-1,b) = b^3 * C^3 / 24
///   Q(b-1,b) = (-1)^b * G(b-1,b) * (A + B*b)
fn leaf(b: usize) -> Terms {
    let b = b as u64;
    let bb = BigInt::from(b);
    let p = &(&bb * &bb) * &(&bb * C3_OVER_24);
    let g = &(&BigInt::from(6 * b - 5) * (2 * b - 1)) * (6 * b - 1);
    let mut q = &g * (A + B * b);
    if b % 2 == 1 {
        q = -&q;
    }
    Terms { p, q, g }
}

/// Combines adjacent ranges:
///   P(a,b) = P(a,m) * P(m,b)
///   Q(a,b) = Q(a,m) * P(m,b) + Q(m,b) * G(a,m)
///   G(a,b) = G(a,m) * G(m,b)
fn merge(l: Terms, r: Terms) -> Terms {
    let p = &l.p * &r.p;
    let q = &(&l.q * &r.p) + &(&r.q * &l.g);
    let g = &l.g * &r.g;
    Terms { p, q, g }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Term-by-term accumulation over the same recurrences; kept only as an
    /// oracle for the splitting recursion.
    fn split_linear(n: usize) -> Terms {
        (2..=n).fold(leaf(1), |acc, b| merge(acc, leaf(b)))
    }

    #[test]
    fn binary_split_matches_linear_fold() {
        for n in [2, 3, 5, 17, 50, 129] {
            let fast = split(0, n, None);
            let slow = split_linear(n);
            assert_eq!(fast.p, slow.p, "P mismatch at {n} terms");
            assert_eq!(fast.q, slow.q, "Q mismatch at {n} terms");
            assert_eq!(fast.g, slow.g, "G mismatch at {n} terms");
        }
    }

    #[test]
    fn truncated_value_matches_published_digits() {
        // http://www.numberworld.org/digits/Pi/
        for (digits, expected_last_10) in [(100, "3421170679"), (10_000, "5256375678")] {
            let req = PrecisionRequest::new(digits).unwrap();
            let result = evaluate(&req, None).unwrap();
            let truncated = result
                .value()
                .shr_digits(result.scale() - digits)
                .to_string();
            assert_eq!(truncated.len(), digits + 1);
            assert!(
                truncated.ends_with(expected_last_10),
                "testing {digits} digits of pi"
            );
        }
    }

    #[test]
    fn observer_sees_every_term() {
        let seen = AtomicUsize::new(0);
        let count = |done: usize| {
            seen.fetch_add(done, Ordering::Relaxed);
        };
        let req = PrecisionRequest::new(500).unwrap();
        evaluate(&req, Some(&count)).unwrap();
        assert_eq!(seen.load(Ordering::Relaxed), req.terms());
    }
}
