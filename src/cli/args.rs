//! CLI argument structures

use crate::config::DigitOrder;
use crate::driver::Kernel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options every binary accepts
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv adds thread ids and lines)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file (default: ./kernels.toml when present)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Solve Two Sum and Add Two Numbers from stdin-style input
#[derive(Parser, Debug)]
#[command(name = "kernels")]
#[command(about = "kernels - Two Sum and Add Two Numbers over stdin input", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find two positions whose values add up to a target
    #[command(name = "two-sum")]
    TwoSum {
        /// Read input from FILE instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Add two numbers given as digit lists
    #[command(name = "add-two-numbers")]
    AddTwoNumbers {
        /// Read input from FILE instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Which end of each digit list is the ones place
        #[arg(long, value_enum)]
        digit_order: Option<DigitOrder>,
    },

    /// Judge one test case against its expected output
    Verify {
        /// Kernel to run
        #[arg(value_enum)]
        kernel: Kernel,

        /// Test case input
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Expected output
        #[arg(short, long, value_name = "FILE")]
        expected: PathBuf,

        /// Per-case time limit in milliseconds (overrides [judge] time_limit_ms)
        #[arg(long, value_name = "MS")]
        time_limit: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Judge the built-in sample cases
    Samples {
        /// Only this kernel (default: both)
        #[arg(value_enum)]
        kernel: Option<Kernel>,

        /// Per-case time limit in milliseconds (overrides [judge] time_limit_ms)
        #[arg(long, value_name = "MS")]
        time_limit: Option<u64>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments of the standalone `two-sum` and `add-two-numbers` binaries
#[derive(Parser, Debug)]
#[command(version, about = "Read the problem from stdin and print the answer", long_about = None)]
pub struct StandaloneCli {
    #[command(flatten)]
    pub global: GlobalOpts,
}
