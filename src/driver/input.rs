use crate::error::{common, ErrorCode, KernelError, Result};
use std::str::SplitAsciiWhitespace;

/// Whitespace-separated token stream over an already-read input text.
///
/// Line breaks carry no meaning; `3\n2 4 3` and `3 2 4 3` read the same.
pub struct TokenReader<'a> {
    tokens: SplitAsciiWhitespace<'a>,
    consumed: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
            consumed: 0,
        }
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.consumed
    }

    fn token(&mut self, what: &str) -> Result<&'a str> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| common::unexpected_eof(what, self.consumed + 1))?;
        self.consumed += 1;
        Ok(token)
    }

    /// Read a signed integer
    pub fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self.token(what)?;
        token.parse::<i64>().map_err(|e| {
            KernelError::input_at(
                ErrorCode::INPUT_NOT_AN_INTEGER,
                format!("{} '{}' is not an integer", what, token),
                self.consumed,
            )
            .with_source(e)
        })
    }

    /// Read an element count, which must be a non-negative integer
    pub fn next_count(&mut self, what: &str) -> Result<usize> {
        let token = self.token(what)?;
        token.parse::<usize>().map_err(|e| {
            KernelError::input_at(
                ErrorCode::INPUT_BAD_COUNT,
                format!("{} '{}' is not a non-negative integer", what, token),
                self.consumed,
            )
            .with_source(e)
        })
    }

    /// Read exactly `count` integers
    pub fn next_ints(&mut self, count: usize, what: &str) -> Result<Vec<i64>> {
        // Reservation is capped; the count is untrusted until the values arrive.
        let mut values = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            values.push(self.next_int(what)?);
        }
        Ok(values)
    }

    /// Number of tokens left unread
    pub fn remaining(self) -> usize {
        self.tokens.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_across_lines() {
        let mut reader = TokenReader::new("4\n2 7 11 15\n9\n");
        let n = reader.next_count("n").unwrap();
        assert_eq!(reader.next_ints(n, "value").unwrap(), vec![2, 7, 11, 15]);
        assert_eq!(reader.next_int("target").unwrap(), 9);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_eof_reports_position() {
        let mut reader = TokenReader::new("3\n1 2");
        let n = reader.next_count("n").unwrap();
        let err = reader.next_ints(n, "value").unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_UNEXPECTED_EOF);
        assert!(matches!(err, KernelError::Input { token: Some(4), .. }));
    }

    #[test]
    fn test_non_integer_token() {
        let mut reader = TokenReader::new("two");
        let err = reader.next_int("target").unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_NOT_AN_INTEGER);
        assert!(err.to_string().contains("'two'"));
    }

    #[test]
    fn test_negative_count() {
        let mut reader = TokenReader::new("-3");
        let err = reader.next_count("n").unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_BAD_COUNT);
        assert_eq!(err.exit_code(), 3);
    }
}
