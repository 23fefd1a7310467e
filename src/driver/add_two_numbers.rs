use super::{note_trailing, DriverSettings, Kernel, TokenReader};
use crate::config::DigitOrder;
use crate::digits::{add, DigitChain};
use crate::error::Result;
use tracing::debug;

/// Read `count` then that many digits, and link them according to `order`.
fn read_chain(reader: &mut TokenReader<'_>, which: &str, order: DigitOrder) -> Result<DigitChain> {
    let count = reader.next_count(&format!("{} digit count", which))?;
    let mut digits = reader.next_ints(count, &format!("{} digit", which))?;
    if order == DigitOrder::MsdFirst {
        digits.reverse();
    }
    DigitChain::from_digits(digits).map_err(|e| e.with_context(format!("{} number", which)))
}

/// Parse the two chains: `m`, `m` digits, `n`, `n` digits
pub fn parse(input: &str, order: DigitOrder) -> Result<(DigitChain, DigitChain)> {
    let mut reader = TokenReader::new(input);
    let first = read_chain(&mut reader, "first", order)?;
    let second = read_chain(&mut reader, "second", order)?;
    note_trailing(Kernel::AddTwoNumbers, reader);
    Ok((first, second))
}

/// Render the sum in the same digit order the input used.
pub fn render(sum: &DigitChain, settings: &DriverSettings) -> String {
    match settings.digit_order {
        DigitOrder::LsdFirst => sum.join(&settings.digit_separator),
        DigitOrder::MsdFirst => {
            let mut digits: Vec<String> = sum.iter().map(|d| d.to_string()).collect();
            digits.reverse();
            digits.join(&settings.digit_separator)
        }
    }
}

pub fn solve(input: &str, settings: &DriverSettings) -> Result<String> {
    let (first, second) = parse(input, settings.digit_order)?;
    debug!(
        first = first.len(),
        second = second.len(),
        order = ?settings.digit_order,
        "running add-two-numbers"
    );
    let sum = add(&first, &second);
    Ok(render(&sum, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_sample_case() {
        let out = solve("3\n2 4 3\n3\n5 6 4", &DriverSettings::default()).unwrap();
        assert_eq!(out, "7 0 8");
    }

    #[test]
    fn test_carry_overflow_case() {
        let out = solve("7\n9 9 9 9 9 9 9\n4\n9 9 9 9", &DriverSettings::default()).unwrap();
        assert_eq!(out, "8 9 9 9 0 0 0 1");
    }

    #[test]
    fn test_msd_first_order() {
        let settings = DriverSettings {
            digit_order: DigitOrder::MsdFirst,
            ..DriverSettings::default()
        };
        // 342 + 465 written left to right
        assert_eq!(solve("3\n3 4 2\n3\n4 6 5", &settings).unwrap(), "8 0 7");
        assert_eq!(solve("2\n9 9\n1\n1", &settings).unwrap(), "1 0 0");
    }

    #[test]
    fn test_concatenated_output() {
        let settings = DriverSettings {
            digit_separator: String::new(),
            ..DriverSettings::default()
        };
        assert_eq!(solve("2\n9 9\n1\n1", &settings).unwrap(), "001");
    }

    #[test]
    fn test_empty_chain_rejected() {
        let err = solve("0\n1\n5", &DriverSettings::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_EMPTY_CHAIN);
        assert!(err.to_string().contains("first number"));
    }

    #[test]
    fn test_out_of_range_digit_rejected() {
        let err = solve("1\n5\n2\n1 12", &DriverSettings::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_DIGIT_OUT_OF_RANGE);
        assert_eq!(err.exit_code(), 4);
    }
}
