//! # judge-kernels
//!
//! Two classic array/list problems as pure kernels, with the stdin/stdout
//! drivers that feed them and a small judge that checks their output.
//!
//! ## Usage
//!
//! ```bash
//! two-sum < input.txt
//! add-two-numbers < input.txt
//! kernels verify two-sum --input case.in --expected case.out
//! kernels samples
//! ```
//!
//! ## Modules
//!
//! - `pair_sum` - Pair-sum index lookup over an integer sequence
//! - `digits` - Digit chains and their carry-propagating addition
//! - `driver` - Token input parsing and output rendering per kernel
//! - `judge` - Test-case verdicts and the built-in sample catalog
//! - `config` - TOML configuration with environment overrides
//! - `cli` - Argument parsing and command execution for the binaries
//! - `error` - Unified error type with codes and exit codes
pub mod cli;
pub mod config;
pub mod digits;
pub mod driver;
pub mod error;
pub mod judge;
pub mod logging;
pub mod pair_sum;


pub use digits::{add, DigitChain};
pub use error::KernelError;
pub use pair_sum::{find_pair, IndexPair};
