//! Built-in test cases for both kernels, in the stdin format of the classic
//! programs.

use super::TestCase;
use crate::driver::Kernel;

/// Every built-in case for `kernel`, sample cases first
pub fn catalog(kernel: Kernel) -> Vec<TestCase> {
    match kernel {
        Kernel::TwoSum => two_sum(),
        Kernel::AddTwoNumbers => add_two_numbers(),
    }
}

fn two_sum() -> Vec<TestCase> {
    // Ten thousand values where only the last one completes the first.
    let mut long_input = String::from("10000\n");
    long_input.push_str(&vec!["1"; 9999].join(" "));
    long_input.push_str(" 9999\n10000");

    vec![
        TestCase::new("4\n2 7 11 15\n9", "0 1").labeled("sample"),
        TestCase::new("3\n3 2 4\n6", "1 2").labeled("no self pairing"),
        TestCase::new("2\n3 3\n6", "0 1").labeled("equal values"),
        TestCase::new("4\n-1 -5 2 10\n1", "0 2").labeled("negative values"),
        TestCase::new("4\n0 4 3 0\n0", "0 3").labeled("zero target"),
        TestCase::new("4\n1000000000 2 7 1000000000\n2000000000", "0 3")
            .labeled("large values"),
        TestCase::new(long_input, "0 9999").labeled("pair at the ends"),
        TestCase::new("3\n1 2 3\n100", "No two sum solution found.").labeled("no solution"),
    ]
}

fn add_two_numbers() -> Vec<TestCase> {
    vec![
        TestCase::new("3\n2 4 3\n3\n5 6 4", "7 0 8").labeled("sample"),
        TestCase::new("1\n0\n1\n0", "0").labeled("zero plus zero"),
        TestCase::new("7\n9 9 9 9 9 9 9\n4\n9 9 9 9", "8 9 9 9 0 0 0 1")
            .labeled("carry past both ends"),
        TestCase::new("2\n1 8\n1\n0", "1 8").labeled("unequal lengths"),
        TestCase::new("1\n5\n1\n5", "0 1").labeled("single digit carry"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::DriverSettings;
    use crate::judge::{judge_cases, Verdict};

    #[test]
    fn test_every_sample_is_accepted() {
        for kernel in Kernel::ALL {
            let report = judge_cases(kernel, &catalog(kernel), &DriverSettings::default(), None);
            assert_eq!(report.verdict, Verdict::Accepted, "{}", report.render_text());
            assert_eq!(report.passed_count(), catalog(kernel).len());
        }
    }

    #[test]
    fn test_long_case_shape() {
        let cases = catalog(Kernel::TwoSum);
        let long = cases
            .iter()
            .find(|c| c.label.as_deref() == Some("pair at the ends"))
            .unwrap();
        assert_eq!(long.input.split_ascii_whitespace().count(), 10_002);
    }
}
