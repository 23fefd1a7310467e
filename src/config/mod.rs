use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod loader;

pub use loader::ConfigLoader;

/// File name looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "kernels.toml";

/// Message printed by the two-sum driver when no pair exists
pub const DEFAULT_NO_SOLUTION_MESSAGE: &str = "No two sum solution found.";

/// How the add-two-numbers driver maps input digits onto a chain.
///
/// `LsdFirst` treats the first digit read as the ones place, which is what
/// the classic stdin program does. `MsdFirst` reads the numeral left to right
/// and prints the sum the same way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DigitOrder {
    #[default]
    LsdFirst,
    MsdFirst,
}

impl std::str::FromStr for DigitOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lsd-first" | "lsd" => Ok(Self::LsdFirst),
            "msd-first" | "msd" => Ok(Self::MsdFirst),
            other => Err(format!(
                "unknown digit order '{}', expected lsd-first or msd-first",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct KernelsConfig {
    pub output: OutputConfig,
    pub input: InputConfig,
    pub judge: JudgeConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub no_solution_message: String,
    pub digit_separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_solution_message: DEFAULT_NO_SOLUTION_MESSAGE.to_string(),
            digit_separator: " ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub digit_order: DigitOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct JudgeConfig {
    /// Per-case wall-clock limit in milliseconds; unlimited when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_ms: Option<u64>,
}

impl JudgeConfig {
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `-v` is not given
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl KernelsConfig {
    /// Apply `KERNELS_*` overrides from the process environment
    pub fn merge_env_vars(&mut self) -> crate::error::Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, so tests need not touch the real environment
    pub fn merge_env_with<F>(&mut self, lookup: F) -> crate::error::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(order) = lookup("KERNELS_DIGIT_ORDER") {
            self.input.digit_order = order.parse().map_err(|e: String| {
                crate::error::KernelError::config_with_code(
                    crate::error::ErrorCode::CONFIG_INVALID_VALUE,
                    e,
                )
                .with_context("KERNELS_DIGIT_ORDER")
            })?;
        }
        Ok(())
    }
}
