use crate::error::{common, ErrorCode, KernelError};
use std::fmt;
use std::str::FromStr;

type Link = Option<Box<DigitNode>>;

#[derive(Debug)]
struct DigitNode {
    digit: u8,
    next: Link,
}

/// A non-negative integer stored as a singly-linked chain of decimal digits,
/// least-significant digit first.
///
/// Every node is owned by exactly one chain. A chain always holds at least one
/// node and every node holds a digit in `0..=9`; the constructors enforce both.
#[derive(Debug)]
pub struct DigitChain {
    head: Link,
    len: usize,
}

impl DigitChain {
    /// The single-node chain representing zero.
    pub fn zero() -> Self {
        Self::from_trusted([0])
    }

    /// Build a chain from digits in least-significant-first order.
    ///
    /// Fails with a validation error on an empty sequence or on any value
    /// outside `0..=9`.
    pub fn from_digits<I>(digits: I) -> Result<Self, KernelError>
    where
        I: IntoIterator<Item = i64>,
    {
        let digits = digits
            .into_iter()
            .enumerate()
            .map(|(position, value)| {
                u8::try_from(value)
                    .ok()
                    .filter(|d| *d <= 9)
                    .ok_or_else(|| common::digit_out_of_range(value, position))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if digits.is_empty() {
            return Err(common::empty_chain());
        }
        Ok(Self::from_trusted(digits))
    }

    /// Link already-checked digits, least-significant first, appending at the tail.
    pub(super) fn from_trusted<I>(digits: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut chain = DigitChain { head: None, len: 0 };
        let mut tail = &mut chain.head;
        for digit in digits {
            debug_assert!(digit <= 9);
            let node = tail.insert(Box::new(DigitNode { digit, next: None }));
            tail = &mut node.next;
            chain.len += 1;
        }
        debug_assert!(chain.len > 0, "digit chains are never empty");
        chain
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true for a chain built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate digits least-significant first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Digits in chain order (least-significant first).
    pub fn digits(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// The represented number as a decimal numeral, most-significant digit first.
    pub fn to_numeral(&self) -> String {
        let mut numeral: Vec<char> = self.iter().map(|d| char::from(b'0' + d)).collect();
        numeral.reverse();
        numeral.into_iter().collect()
    }

    /// Render digits in chain order joined by `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Drop for DigitChain {
    fn drop(&mut self) {
        // Unlink node by node; the default recursive drop can exhaust the stack.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Clone for DigitChain {
    fn clone(&self) -> Self {
        Self::from_trusted(self.iter())
    }
}

impl PartialEq for DigitChain {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DigitChain {}

impl From<u128> for DigitChain {
    fn from(mut value: u128) -> Self {
        let mut digits = Vec::new();
        loop {
            digits.push((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self::from_trusted(digits)
    }
}

impl FromStr for DigitChain {
    type Err = KernelError;

    /// Parse a decimal numeral written most-significant digit first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KernelError::validation_with_code(
                ErrorCode::VALIDATION_NOT_A_NUMERAL,
                format!("'{}' is not a decimal numeral", s),
                None,
            ));
        }
        Ok(Self::from_trusted(s.bytes().rev().map(|b| b - b'0')))
    }
}

impl fmt::Display for DigitChain {
    /// Digits in chain order, space-separated, as the drivers print them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(" "))
    }
}

impl<'a> IntoIterator for &'a DigitChain {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a chain's digits, least-significant first.
pub struct Iter<'a> {
    next: Option<&'a DigitNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.digit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digits_keeps_input_order() {
        let chain = DigitChain::from_digits([2, 4, 3]).unwrap();
        assert_eq!(chain.digits(), vec![2, 4, 3]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.to_numeral(), "342");
        assert_eq!(chain.to_string(), "2 4 3");
    }

    #[test]
    fn test_zero_is_a_single_node() {
        let zero = DigitChain::zero();
        assert_eq!(zero.digits(), vec![0]);
        assert!(!zero.is_empty());
        assert_eq!(zero, DigitChain::from(0u128));
    }

    #[test]
    fn test_rejects_out_of_range_digits() {
        let err = DigitChain::from_digits([1, 10, 3]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_DIGIT_OUT_OF_RANGE);
        assert!(err.user_message().contains("position 1"));

        let err = DigitChain::from_digits([-1]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_DIGIT_OUT_OF_RANGE);
    }

    #[test]
    fn test_rejects_empty_chain() {
        let err = DigitChain::from_digits(Vec::<i64>::new()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_EMPTY_CHAIN);
    }

    #[test]
    fn test_numeral_parsing() {
        let chain: DigitChain = "807".parse().unwrap();
        assert_eq!(chain.digits(), vec![7, 0, 8]);
        assert_eq!(chain, DigitChain::from(807u128));

        assert!("".parse::<DigitChain>().is_err());
        assert!("12a".parse::<DigitChain>().is_err());
        assert!("-5".parse::<DigitChain>().is_err());
    }

    #[test]
    fn test_join_with_custom_separator() {
        let chain = DigitChain::from(1234u128);
        assert_eq!(chain.join(""), "4321");
        assert_eq!(chain.join(","), "4,3,2,1");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = DigitChain::from(99u128);
        let copy = original.clone();
        drop(original);
        assert_eq!(copy.digits(), vec![9, 9]);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let chain = DigitChain::from_trusted(std::iter::repeat(7).take(1_000_000));
        assert_eq!(chain.len(), 1_000_000);
        drop(chain);
    }
}
