//! Fixed-radix arbitrary-precision integers.
//!
//! Limbs hold base-10^9 digit groups, least significant first. 10^9 is the
//! largest power of ten whose limb-by-limb products plus carries stay inside
//! a `u64` accumulator during schoolbook multiplication. A decimal radix also
//! makes the final digit rendering a plain limb walk instead of a costly
//! base conversion.
//!
//! Invariant: no leading zero limbs; the canonical zero is a single `0` limb
//! with non-negative sign.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::Error;

pub(crate) type Limb = u64;

/// Decimal digits per limb.
pub const LIMB_DIGITS: usize = 9;
/// Limb radix, 10^LIMB_DIGITS.
pub const RADIX: Limb = 1_000_000_000;

const POW10: [Limb; 9] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

/// Operands with fewer limbs than this on either side multiply via the
/// schoolbook loop; larger balanced products recurse through Karatsuba.
const KARATSUBA_THRESHOLD: usize = 32;

/// Root digits the `u64` seed delivers exactly (the floor root of an
/// 18-digit leading cut).
const SEED_DIGITS: usize = 9;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sign {
    NonNegative,
    Negative,
}

impl Sign {
    fn opposite(self) -> Sign {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }
}

/// Sign-magnitude big integer over base-10^9 limbs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BigInt {
    sign: Sign,
    limbs: Vec<Limb>,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::NonNegative,
            limbs: vec![0],
        }
    }

    pub fn one() -> Self {
        BigInt {
            sign: Sign::NonNegative,
            limbs: vec![1],
        }
    }

    /// 10^count.
    pub fn pow10(count: usize) -> Self {
        BigInt::one().shl_digits(count)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Builds a value from raw limbs, trimming leading zeros and
    /// canonicalizing zero to non-negative.
    pub(crate) fn from_limbs(sign: Sign, mut limbs: Vec<Limb>) -> Self {
        while limbs.len() > 1 && limbs[limbs.len() - 1] == 0 {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        let sign = if limbs.len() == 1 && limbs[0] == 0 {
            Sign::NonNegative
        } else {
            sign
        };
        BigInt { sign, limbs }
    }

    /// Count of significant decimal digits; zero counts as one digit.
    pub fn decimal_digits(&self) -> usize {
        if self.is_zero() {
            return 1;
        }
        let top = self.limbs[self.limbs.len() - 1];
        (self.limbs.len() - 1) * LIMB_DIGITS + top.ilog10() as usize + 1
    }

    /// Multiplies by 10^count.
    pub fn shl_digits(&self, count: usize) -> Self {
        if self.is_zero() || count == 0 {
            return self.clone();
        }
        let whole = count / LIMB_DIGITS;
        let part = count % LIMB_DIGITS;
        let mut limbs = vec![0; whole];
        if part == 0 {
            limbs.extend_from_slice(&self.limbs);
        } else {
            limbs.extend(mul_small(&self.limbs, POW10[part]));
        }
        BigInt::from_limbs(self.sign, limbs)
    }

    /// Divides by 10^count, truncating the magnitude (toward zero).
    pub fn shr_digits(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        let whole = count / LIMB_DIGITS;
        if whole >= self.limbs.len() {
            return BigInt::zero();
        }
        let part = count % LIMB_DIGITS;
        let mut limbs = self.limbs[whole..].to_vec();
        if part > 0 {
            limbs = div_small(&limbs, POW10[part]).0;
        }
        BigInt::from_limbs(self.sign, limbs)
    }

    /// Truncating division: quotient rounded toward zero, remainder with the
    /// sign of the dividend, so `(a / b) * b + (a mod b) == a`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = div_rem_mag(&self.limbs, &divisor.limbs);
        let q_sign = if self.sign == divisor.sign {
            Sign::NonNegative
        } else {
            Sign::Negative
        };
        Ok((
            BigInt::from_limbs(q_sign, q),
            BigInt::from_limbs(self.sign, r),
        ))
    }

    /// Fixed-point quotient truncated to `frac_digits` fractional decimal
    /// digits: `trunc(self * 10^frac_digits / divisor)`.
    pub fn div_fixed(&self, divisor: &BigInt, frac_digits: usize) -> Result<BigInt, Error> {
        if frac_digits == 0 {
            return Err(Error::InvalidPrecision);
        }
        let (q, _) = self.shl_digits(frac_digits).div_rem(divisor)?;
        Ok(q)
    }

    /// Floor of the square root, by Newton iteration over a doubling
    /// precision ladder.
    ///
    /// The seed root is exact for the leading digits that fit a native
    /// integer. Each ladder step roughly doubles the accurate digit count
    /// of the iterate and divides a cut of the operand at that step's scale
    /// only, so the ladder costs about as much as two divisions at the
    /// final size rather than a full-precision division per iteration. A
    /// Newton step never undershoots, so the ladder leaves the iterate
    /// within a couple of units of the true root and a short walk on the
    /// exact square finishes the job.
    pub fn isqrt(&self) -> Result<BigInt, Error> {
        assert!(
            self.sign == Sign::NonNegative,
            "integer square root of a negative value"
        );
        let d = self.decimal_digits();
        if d <= 18 {
            return Ok(BigInt::from(isqrt_u64(self.to_u64())));
        }
        let root_digits = d.div_ceil(2);

        // accuracy targets from full size down to the seed, each at most
        // double (minus a safety margin) the one below it
        let mut ladder = Vec::new();
        let mut p = root_digits;
        while p > SEED_DIGITS {
            ladder.push(p);
            p = p.div_ceil(2) + 2;
        }

        let seed = self.shr_digits(2 * (root_digits - SEED_DIGITS)).to_u64();
        let mut x = BigInt::from(isqrt_u64(seed));
        let mut have = SEED_DIGITS;
        for &want in ladder.iter().rev() {
            // x approximates the root of self cut to 2*want digits
            let target = self.shr_digits(2 * (root_digits - want));
            let y = x.shl_digits(want - have);
            let (q, _) = target.div_rem(&y)?;
            x = (&y + &q).half();
            have = want;
        }

        let one = BigInt::one();
        while &x * &x > *self {
            x = &x - &one;
        }
        loop {
            let next = &x + &one;
            if &next * &next > *self {
                return Ok(x);
            }
            x = next;
        }
    }

    /// Square root scaled to `frac_digits` fixed-point digits:
    /// `floor(sqrt(self) * 10^frac_digits)`.
    pub fn sqrt_scaled(&self, frac_digits: usize) -> Result<BigInt, Error> {
        if frac_digits == 0 {
            return Err(Error::InvalidPrecision);
        }
        self.shl_digits(2 * frac_digits).isqrt()
    }

    fn half(&self) -> BigInt {
        BigInt::from_limbs(self.sign, div_small(&self.limbs, 2).0)
    }

    /// Only valid for values of at most 18 decimal digits.
    fn to_u64(&self) -> u64 {
        debug_assert!(self.decimal_digits() <= 18);
        self.limbs.iter().rev().fold(0, |acc, &l| acc * RADIX + l)
    }
}

impl From<u64> for BigInt {
    fn from(mut v: u64) -> Self {
        let mut limbs = Vec::with_capacity(3);
        loop {
            limbs.push(v % RADIX);
            v /= RADIX;
            if v == 0 {
                break;
            }
        }
        BigInt {
            sign: Sign::NonNegative,
            limbs,
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            (Sign::NonNegative, Sign::NonNegative) => cmp_mag(&self.limbs, &other.limbs),
            (Sign::Negative, Sign::Negative) => cmp_mag(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn add_values(lhs: &BigInt, rhs_sign: Sign, rhs_limbs: &[Limb]) -> BigInt {
    if lhs.sign == rhs_sign {
        return BigInt::from_limbs(lhs.sign, add_mag(&lhs.limbs, rhs_limbs));
    }
    match cmp_mag(&lhs.limbs, rhs_limbs) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_limbs(lhs.sign, sub_mag(&lhs.limbs, rhs_limbs)),
        Ordering::Less => BigInt::from_limbs(rhs_sign, sub_mag(rhs_limbs, &lhs.limbs)),
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add_values(self, rhs.sign, &rhs.limbs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        add_values(self, rhs.sign.opposite(), &rhs.limbs)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut out = self.clone();
        if !out.is_zero() {
            out.sign = out.sign.opposite();
        }
        out
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        let sign = if self.sign == rhs.sign {
            Sign::NonNegative
        } else {
            Sign::Negative
        };
        BigInt::from_limbs(sign, mul_mag(&self.limbs, &rhs.limbs))
    }
}

impl Mul<u64> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: u64) -> BigInt {
        if rhs == 0 || self.is_zero() {
            return BigInt::zero();
        }
        if rhs < RADIX {
            BigInt::from_limbs(self.sign, mul_small(&self.limbs, rhs))
        } else {
            self * &BigInt::from(rhs)
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative && !self.is_zero() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.limbs[self.limbs.len() - 1])?;
        for l in self.limbs[..self.limbs.len() - 1].iter().rev() {
            write!(f, "{l:09}")?;
        }
        Ok(())
    }
}

fn cmp_mag(a: &[Limb], b: &[Limb]) -> Ordering {
    // operands are normalized, so length decides first
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

fn add_mag(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &l) in long.iter().enumerate() {
        let mut t = l + carry;
        if i < short.len() {
            t += short[i];
        }
        if t >= RADIX {
            out.push(t - RADIX);
            carry = 1;
        } else {
            out.push(t);
            carry = 0;
        }
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Magnitude subtraction; the caller guarantees `a >= b`.
fn sub_mag(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &l) in a.iter().enumerate() {
        let sub = borrow + if i < b.len() { b[i] } else { 0 };
        if l >= sub {
            out.push(l - sub);
            borrow = 0;
        } else {
            out.push(l + RADIX - sub);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0);
    out
}

fn mul_small(a: &[Limb], m: Limb) -> Vec<Limb> {
    debug_assert!(m < RADIX);
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;
    for &l in a {
        let t = l * m + carry;
        out.push(t % RADIX);
        carry = t / RADIX;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

fn div_small(a: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    debug_assert!(d > 0 && d < RADIX);
    let mut out = vec![0; a.len()];
    let mut rem = 0;
    for i in (0..a.len()).rev() {
        let cur = rem * RADIX + a[i];
        out[i] = cur / d;
        rem = cur % d;
    }
    (out, rem)
}

/// Magnitude product; empty slices act as zero and yield an empty vector.
fn mul_mag(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len().min(b.len()) < KARATSUBA_THRESHOLD {
        mul_schoolbook(a, b)
    } else {
        mul_karatsuba(a, b)
    }
}

fn mul_schoolbook(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut out = vec![0; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate() {
            let t = out[i + j] + ai * bj + carry;
            out[i + j] = t % RADIX;
            carry = t / RADIX;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let t = out[k] + carry;
            out[k] = t % RADIX;
            carry = t / RADIX;
            k += 1;
        }
    }
    out
}

fn mul_karatsuba(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let m = (a.len().max(b.len()) + 1) / 2;
    let (a0, a1) = a.split_at(a.len().min(m));
    let (b0, b1) = b.split_at(b.len().min(m));

    let z0 = mul_mag(a0, b0);
    let z2 = mul_mag(a1, b1);

    // (a0 + a1)(b0 + b1) - z0 - z2 stays non-negative, so the whole
    // recursion runs on magnitudes
    let s1 = add_mag(a0, a1);
    let s2 = add_mag(b0, b1);
    let mut z1 = mul_mag(&s1, &s2);
    sub_in_place(&mut z1, &z0);
    sub_in_place(&mut z1, &z2);

    let mut out = vec![0; a.len() + b.len()];
    add_at(&mut out, &z0, 0);
    add_at(&mut out, &z1, m);
    add_at(&mut out, &z2, 2 * m);
    out
}

/// In-place magnitude subtraction; the caller guarantees `a >= b`.
fn sub_in_place(a: &mut [Limb], b: &[Limb]) {
    let mut borrow = 0;
    for (i, l) in a.iter_mut().enumerate() {
        let sub = borrow + if i < b.len() { b[i] } else { 0 };
        if *l >= sub {
            *l -= sub;
            borrow = 0;
        } else {
            *l += RADIX - sub;
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0);
}

/// `out[offset..] += s`; the significant limbs of `s` always fit because the
/// caller sized `out` for the full product.
fn add_at(out: &mut [Limb], s: &[Limb], offset: usize) {
    let mut n = s.len();
    while n > 0 && s[n - 1] == 0 {
        n -= 1;
    }
    let mut carry = 0;
    for i in 0..n {
        let t = out[offset + i] + s[i] + carry;
        if t >= RADIX {
            out[offset + i] = t - RADIX;
            carry = 1;
        } else {
            out[offset + i] = t;
            carry = 0;
        }
    }
    let mut k = offset + n;
    while carry > 0 {
        let t = out[k] + carry;
        out[k] = t % RADIX;
        carry = t / RADIX;
        k += 1;
    }
}

/// Knuth algorithm D over base-10^9 limbs: normalize so the divisor's top
/// limb is at least RADIX/2, estimate each quotient limb from the top two
/// dividend limbs, correct with the next divisor limb, and add back after a
/// rare one-off over-estimate.
fn div_rem_mag(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(v[v.len() - 1] != 0 || v.len() == 1);
    if cmp_mag(u, v) == Ordering::Less {
        return (vec![0], u.to_vec());
    }
    if v.len() == 1 {
        let (q, r) = div_small(u, v[0]);
        return (q, vec![r]);
    }

    let n = v.len();
    let m = u.len() - n;
    let d = RADIX / (v[n - 1] + 1);
    let mut un = mul_small(u, d);
    un.resize(u.len() + 1, 0);
    let vn = mul_small(v, d);
    debug_assert_eq!(vn.len(), n);

    let mut q = vec![0; m + 1];
    for j in (0..=m).rev() {
        let top = un[j + n] * RADIX + un[j + n - 1];
        let mut qhat = top / vn[n - 1];
        let mut rhat = top % vn[n - 1];
        while qhat >= RADIX || qhat * vn[n - 2] > rhat * RADIX + un[j + n - 2] {
            qhat -= 1;
            rhat += vn[n - 1];
            if rhat >= RADIX {
                break;
            }
        }

        // multiply and subtract
        let mut carry = 0;
        let mut borrow = 0i64;
        for i in 0..n {
            let p = qhat * vn[i] + carry;
            carry = p / RADIX;
            let mut t = un[j + i] as i64 - (p % RADIX) as i64 - borrow;
            if t < 0 {
                t += RADIX as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            un[j + i] = t as Limb;
        }
        let mut t = un[j + n] as i64 - carry as i64 - borrow;
        if t < 0 {
            // qhat was one too large; add the divisor back
            t += RADIX as i64;
            un[j + n] = t as Limb;
            qhat -= 1;
            let mut c = 0;
            for i in 0..n {
                let s = un[j + i] + vn[i] + c;
                if s >= RADIX {
                    un[j + i] = s - RADIX;
                    c = 1;
                } else {
                    un[j + i] = s;
                    c = 0;
                }
            }
            let s = un[j + n] + c;
            un[j + n] = if s >= RADIX { s - RADIX } else { s };
        } else {
            un[j + n] = t as Limb;
        }
        q[j] = qhat;
    }

    un.truncate(n);
    let (rem, leftover) = div_small(&un, d);
    debug_assert_eq!(leftover, 0);
    (q, rem)
}

fn isqrt_u64(n: u64) -> u64 {
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && (x as u128) * (x as u128) > n as u128 {
        x -= 1;
    }
    while ((x + 1) as u128) * ((x + 1) as u128) <= n as u128 {
        x += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn big(s: &str) -> BigInt {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::NonNegative, s),
        };
        let mut limbs = Vec::new();
        let mut i = digits.len();
        while i > 0 {
            let start = i.saturating_sub(LIMB_DIGITS);
            limbs.push(digits[start..i].parse().unwrap());
            i = start;
        }
        BigInt::from_limbs(sign, limbs)
    }

    fn random_bigint(rng: &mut StdRng, limbs: usize) -> BigInt {
        let v = (0..limbs).map(|_| rng.gen_range(0..RADIX)).collect();
        BigInt::from_limbs(Sign::NonNegative, v)
    }

    #[test]
    fn display_round_trips_across_limb_boundaries() {
        for s in [
            "0",
            "7",
            "999999999",
            "1000000000",
            "1000000001",
            "12345678901234567890",
            "-12345678901234567890",
            "100000000000000000000000000",
        ] {
            assert_eq!(big(s).to_string(), s);
        }
    }

    #[test]
    fn zero_is_canonical() {
        let a = big("123456789123456789");
        let diff = &a - &a;
        assert!(diff.is_zero());
        assert_eq!(diff.sign(), Sign::NonNegative);
        assert_eq!(diff.to_string(), "0");
        assert_eq!((-&BigInt::zero()).sign(), Sign::NonNegative);
    }

    #[test]
    fn signed_addition_and_subtraction() {
        let cases = [
            ("5", "3", "8", "2"),
            ("3", "5", "8", "-2"),
            ("-5", "3", "-2", "-8"),
            ("1000000000", "1", "1000000001", "999999999"),
            ("999999999999999999", "1", "1000000000000000000", "999999999999999998"),
        ];
        for (a, b, sum, diff) in cases {
            let (a, b) = (big(a), big(b));
            assert_eq!((&a + &b).to_string(), sum);
            assert_eq!((&a - &b).to_string(), diff);
        }
    }

    #[test]
    fn ordering_respects_sign_and_magnitude() {
        assert!(big("-10") < big("3"));
        assert!(big("-10") < big("-3"));
        assert!(big("1000000000") > big("999999999"));
        assert!(big("12") == big("12"));
    }

    #[test]
    fn decimal_digit_counting() {
        assert_eq!(BigInt::zero().decimal_digits(), 1);
        assert_eq!(big("999999999").decimal_digits(), 9);
        assert_eq!(big("1000000000").decimal_digits(), 10);
        assert_eq!(BigInt::pow10(50).decimal_digits(), 51);
    }

    #[test]
    fn decimal_shifts() {
        assert_eq!(big("123").shl_digits(5), big("12300000"));
        assert_eq!(big("123").shl_digits(11), big("12300000000000"));
        assert_eq!(big("12345678901").shr_digits(4), big("1234567"));
        assert_eq!(big("123").shr_digits(10), BigInt::zero());
        assert_eq!(BigInt::pow10(30).to_string(), format!("1{}", "0".repeat(30)));
    }

    #[test]
    fn multiply_by_plain_u64() {
        assert_eq!((&big("2") * 10_939_058_860_032_000u64).to_string(), "21878117720064000");
        assert_eq!((&big("123") * 0u64), BigInt::zero());
        assert_eq!((&-&big("4") * 3u64).to_string(), "-12");
    }

    #[test]
    fn schoolbook_and_karatsuba_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let sizes = [
            (1, 1),
            (2, 3),
            (31, 31),
            (31, 32),
            (32, 32),
            (33, 31),
            (40, 64),
            (63, 64),
            (64, 64),
            (65, 64),
            (100, 37),
            (128, 128),
        ];
        for (la, lb) in sizes {
            let a = random_bigint(&mut rng, la);
            let b = random_bigint(&mut rng, lb);
            let slow = BigInt::from_limbs(Sign::NonNegative, mul_schoolbook(&a.limbs, &b.limbs));
            let fast = BigInt::from_limbs(Sign::NonNegative, mul_karatsuba(&a.limbs, &b.limbs));
            assert_eq!(slow, fast, "sizes {la}x{lb}");
            assert_eq!(&a * &b, slow);
        }
    }

    #[test]
    fn division_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let la = rng.gen_range(1..80);
            let lb = rng.gen_range(1..80);
            let a = random_bigint(&mut rng, la);
            let mut b = random_bigint(&mut rng, lb);
            if b.is_zero() {
                b = BigInt::one();
            }
            let (q, r) = a.div_rem(&b).unwrap();
            assert!(r < b, "remainder {r} not below divisor {b}");
            assert_eq!(&(&q * &b) + &r, a);
        }
    }

    #[test]
    fn truncating_division_signs() {
        let (q, r) = big("-7").div_rem(&big("2")).unwrap();
        assert_eq!((q.to_string(), r.to_string()), ("-3".into(), "-1".into()));
        let (q, r) = big("7").div_rem(&big("-2")).unwrap();
        assert_eq!((q.to_string(), r.to_string()), ("-3".into(), "1".into()));
        let (q, r) = big("-7").div_rem(&big("-2")).unwrap();
        assert_eq!((q.to_string(), r.to_string()), ("3".into(), "-1".into()));
    }

    #[test]
    fn division_by_zero_is_reported() {
        let a = big("123");
        assert!(matches!(a.div_rem(&BigInt::zero()), Err(Error::DivisionByZero)));
        assert!(matches!(a.div_fixed(&BigInt::zero(), 5), Err(Error::DivisionByZero)));
    }

    #[test]
    fn fixed_point_division_truncates() {
        assert_eq!(big("1").div_fixed(&big("3"), 10).unwrap(), big("3333333333"));
        assert_eq!(big("2").div_fixed(&big("7"), 5).unwrap(), big("28571"));
        assert_eq!(big("-1").div_fixed(&big("3"), 3).unwrap(), big("-333"));
        assert!(matches!(big("1").div_fixed(&big("3"), 0), Err(Error::InvalidPrecision)));
    }

    #[test]
    fn small_square_roots() {
        for (n, root) in [(0u64, 0u64), (1, 1), (2, 1), (3, 1), (4, 2), (99, 9), (100, 10)] {
            assert_eq!(BigInt::from(n).isqrt().unwrap(), BigInt::from(root));
        }
    }

    #[test]
    fn square_root_at_power_of_ten_boundaries() {
        // roots of 10^2k and 10^2k - 1 stress both parities of the
        // precision ladder and the closing walk
        for k in [9, 10, 13, 40, 100] {
            let even = BigInt::pow10(2 * k);
            assert_eq!(even.isqrt().unwrap(), BigInt::pow10(k));
            assert_eq!(
                (&even - &BigInt::one()).isqrt().unwrap(),
                &BigInt::pow10(k) - &BigInt::one()
            );
        }
    }

    #[test]
    fn square_root_brackets_large_values() {
        let mut rng = StdRng::seed_from_u64(99);
        for limbs in [1, 2, 3, 5, 9, 20, 40, 90, 200] {
            let a = random_bigint(&mut rng, limbs);
            if a.is_zero() {
                continue;
            }
            let sq = &a * &a;
            assert_eq!(sq.isqrt().unwrap(), a);
            assert_eq!((&sq + &BigInt::one()).isqrt().unwrap(), a);
            if !a.is_zero() {
                assert_eq!((&sq - &BigInt::one()).isqrt().unwrap(), &a - &BigInt::one());
            }
        }
    }

    #[test]
    fn scaled_square_root() {
        // floor(sqrt(2) * 10^10)
        assert_eq!(big("2").sqrt_scaled(10).unwrap(), big("14142135623"));
        assert!(matches!(big("2").sqrt_scaled(0), Err(Error::InvalidPrecision)));
    }
}
