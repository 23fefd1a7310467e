use super::DigitChain;
use std::iter;
use tracing::trace;

/// Add two digit chains, returning a newly owned chain holding the sum.
///
/// Both chains are walked in lock-step, least-significant digit first. A chain
/// that runs out contributes zeros, and a carry left after both are exhausted
/// becomes one extra high digit, so the result has `max(len a, len b)` digits
/// or one more.
pub fn add(a: &DigitChain, b: &DigitChain) -> DigitChain {
    let mut left = a.iter();
    let mut right = b.iter();
    let mut carry = 0u8;

    let sum_digits = iter::from_fn(|| {
        let (x, y) = (left.next(), right.next());
        if x.is_none() && y.is_none() && carry == 0 {
            return None;
        }
        let sum = carry + x.unwrap_or(0) + y.unwrap_or(0);
        carry = sum / 10;
        Some(sum % 10)
    });

    let result = DigitChain::from_trusted(sum_digits);
    trace!(
        left = a.len(),
        right = b.len(),
        result = result.len(),
        "digit chains added"
    );
    result
}
