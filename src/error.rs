/// Failure conditions of the digit engine.
///
/// Every variant is deterministic in the requested digit count: retrying an
/// identical request fails identically, so there is no retry policy anywhere
/// in the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid precision: requested digit count or guard margin out of range")]
    InvalidPrecision,
    #[error("division by zero")]
    DivisionByZero,
    #[error("required limb count {limbs} exceeds addressable memory")]
    ArithmeticOverflow { limbs: u128 },
    #[error("cannot allocate working memory for {limbs} limbs")]
    ResourceExhausted { limbs: usize },
}
