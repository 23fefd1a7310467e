//! Stdin-style drivers: parse the token input of a kernel, run it, and render
//! the single output line the classic programs print.

pub mod add_two_numbers;
pub mod input;
pub mod two_sum;

pub use input::TokenReader;

use crate::config::{DigitOrder, KernelsConfig, DEFAULT_NO_SOLUTION_MESSAGE};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two problems this crate solves
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Kernel {
    /// Pair-sum index lookup
    TwoSum,
    /// Digit-chain addition
    AddTwoNumbers,
}

impl Kernel {
    pub const ALL: [Kernel; 2] = [Kernel::TwoSum, Kernel::AddTwoNumbers];

    pub fn name(&self) -> &'static str {
        match self {
            Kernel::TwoSum => "two-sum",
            Kernel::AddTwoNumbers => "add-two-numbers",
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering and input conventions shared by the drivers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSettings {
    pub no_solution_message: String,
    pub digit_separator: String,
    pub digit_order: DigitOrder,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            no_solution_message: DEFAULT_NO_SOLUTION_MESSAGE.to_string(),
            digit_separator: " ".to_string(),
            digit_order: DigitOrder::LsdFirst,
        }
    }
}

impl From<&KernelsConfig> for DriverSettings {
    fn from(config: &KernelsConfig) -> Self {
        Self {
            no_solution_message: config.output.no_solution_message.clone(),
            digit_separator: config.output.digit_separator.clone(),
            digit_order: config.input.digit_order,
        }
    }
}

/// Run `kernel` over the whole input text and return its output line without
/// the trailing newline.
pub fn run(kernel: Kernel, input: &str, settings: &DriverSettings) -> Result<String> {
    match kernel {
        Kernel::TwoSum => two_sum::solve(input, settings),
        Kernel::AddTwoNumbers => add_two_numbers::solve(input, settings),
    }
}

/// Log leftover tokens; the classic programs ignore them too.
fn note_trailing(kernel: Kernel, reader: TokenReader<'_>) {
    let consumed = reader.position();
    let leftover = reader.remaining();
    if leftover > 0 {
        tracing::debug!(%kernel, consumed, leftover, "ignoring trailing input tokens");
    }
}
