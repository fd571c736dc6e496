//! Rendering of the scaled series output into a decimal digit string.

use crate::bigint::BigInt;
use crate::error::Error;
use crate::ComputationResult;

/// Fewest guard digits that make round-half-up on the dropped tail
/// trustworthy given the one-unit slack of the series stage.
const MIN_GUARD: usize = 2;

/// Renders `"3."` followed by exactly N fractional digits, rounding
/// half-up on the guard digits being dropped.
///
/// `InvalidPrecision` here means the series stage delivered fewer digits
/// than its declared scale, which is an internal precision-budget bug, not
/// a caller error.
pub fn render(result: &ComputationResult) -> Result<String, Error> {
    let n = result.digits;
    let scale = result.scale;
    if scale < n + MIN_GUARD {
        return Err(Error::InvalidPrecision);
    }
    // pi * 10^scale carries exactly scale+1 digits
    if result.value.decimal_digits() != scale + 1 {
        return Err(Error::InvalidPrecision);
    }

    let guard = scale - n;
    let (mut kept, dropped) = result.value.div_rem(&BigInt::pow10(guard))?;
    let half = &BigInt::pow10(guard - 1) * 5u64;
    if dropped >= half {
        kept = &kept + &BigInt::one();
    }

    let s = kept.to_string();
    if s.len() != n + 1 || !s.starts_with('3') {
        return Err(Error::InvalidPrecision);
    }
    let mut out = String::with_capacity(n + 2);
    out.push_str("3.");
    out.push_str(&s[1..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(value: u64, digits: usize, scale: usize) -> ComputationResult {
        ComputationResult {
            value: BigInt::from(value),
            digits,
            scale,
        }
    }

    #[test]
    fn rounds_guard_digits_half_up() {
        // 3.14159265 to four digits: dropped "9265" rounds the tail up
        assert_eq!(render(&result(314_159_265, 4, 8)).unwrap(), "3.1416");
        // dropped "500" is exactly half
        assert_eq!(render(&result(314_500, 2, 5)).unwrap(), "3.15");
        // dropped "499" stays down
        assert_eq!(render(&result(314_499, 2, 5)).unwrap(), "3.14");
    }

    #[test]
    fn preserves_trailing_zeros() {
        assert_eq!(render(&result(3_140_001, 3, 6)).unwrap(), "3.140");
        assert_eq!(render(&result(3_000_001, 3, 6)).unwrap(), "3.000");
    }

    #[test]
    fn rejects_insufficient_guard() {
        assert!(matches!(
            render(&result(31_415, 4, 4)),
            Err(Error::InvalidPrecision)
        ));
        assert!(matches!(
            render(&result(314_159, 4, 5)),
            Err(Error::InvalidPrecision)
        ));
    }

    #[test]
    fn rejects_short_value() {
        // declared scale 10 but the value only has 5 digits
        assert!(matches!(
            render(&result(31_415, 5, 10)),
            Err(Error::InvalidPrecision)
        ));
    }
}
