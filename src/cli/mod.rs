//! Command execution for the `kernels` binary and the standalone binaries.

pub mod args;

pub use args::{Cli, Commands, GlobalOpts, StandaloneCli};

use crate::config::{ConfigLoader, KernelsConfig};
use crate::driver::{self, DriverSettings, Kernel};
use crate::error::{common, describe_error_code, ErrorCode, ErrorExt, KernelError, Result};
use crate::judge::{self, samples, JudgeReport, TestCase};
use crate::logging;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, trace};

/// Read the whole input from `path`, or from stdin when `path` is `None`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            common::read_failed(&path.display().to_string()).with_source(e)
        }),
        None => io::read_to_string(io::stdin())
            .map_err(|e| common::read_failed("stdin").with_source(e)),
    }
}

/// Load configuration and install logging; logging is up even when loading fails.
pub fn bootstrap(global: &GlobalOpts) -> Result<KernelsConfig> {
    let loaded = ConfigLoader::new(global.config.clone()).load();
    let level = loaded
        .as_ref()
        .map(|c| c.log.level.clone())
        .unwrap_or_else(|_| KernelsConfig::default().log.level);
    logging::init(global.verbose, &level);

    debug!("kernels started with verbosity level: {}", global.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    loaded
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(|e| {
        KernelError::io_with_code(ErrorCode::IO_WRITE_FAILED, "failed to write output")
            .with_source(e)
    })
}

fn write_report(out: &mut dyn Write, report: &JudgeReport, json: bool) -> Result<()> {
    if json {
        let text =
            serde_json::to_string_pretty(report).to_kernel_error("cannot serialize report")?;
        write_line(out, &text)
    } else {
        write_line(out, &report.render_text())
    }
}

fn verdict_error(reports: &[JudgeReport]) -> Result<()> {
    match reports.iter().find(|r| !r.verdict.is_accepted()) {
        None => Ok(()),
        Some(report) => {
            let code = match report.verdict {
                judge::Verdict::InvalidInput => ErrorCode::JUDGE_INVALID_INPUT,
                judge::Verdict::TimeLimitExceeded => ErrorCode::JUDGE_TIME_LIMIT_EXCEEDED,
                _ => ErrorCode::JUDGE_WRONG_ANSWER,
            };
            Err(KernelError::judge(
                code,
                format!("{} finished with verdict {}", report.kernel, report.verdict),
            ))
        }
    }
}

/// A `--time-limit` flag wins over `[judge] time_limit_ms`
fn time_limit(flag: Option<u64>, config: &KernelsConfig) -> Option<Duration> {
    flag.map(Duration::from_millis).or_else(|| config.judge.time_limit())
}

/// Execute a `kernels` subcommand, writing results to `out`
pub fn execute(command: Commands, config: &KernelsConfig, out: &mut dyn Write) -> Result<()> {
    let mut settings = DriverSettings::from(config);

    match command {
        Commands::TwoSum { input } => {
            let text = read_input(input.as_deref())?;
            write_line(out, &driver::run(Kernel::TwoSum, &text, &settings)?)
        }
        Commands::AddTwoNumbers { input, digit_order } => {
            if let Some(order) = digit_order {
                settings.digit_order = order;
            }
            let text = read_input(input.as_deref())?;
            write_line(out, &driver::run(Kernel::AddTwoNumbers, &text, &settings)?)
        }
        Commands::Verify {
            kernel,
            input,
            expected,
            time_limit: limit_flag,
            json,
        } => {
            let case = TestCase::new(
                read_input(Some(input.as_path()))?,
                read_input(Some(expected.as_path()))?,
            )
            .labeled(input.display().to_string());
            let limit = time_limit(limit_flag, config);
            let report = judge::judge_cases(kernel, std::slice::from_ref(&case), &settings, limit);
            write_report(out, &report, json)?;
            verdict_error(std::slice::from_ref(&report))
        }
        Commands::Samples {
            kernel,
            time_limit: limit_flag,
            json,
        } => {
            let kernels = match kernel {
                Some(k) => vec![k],
                None => Kernel::ALL.to_vec(),
            };
            // Sample expectations are written in the default output format.
            let sample_settings = DriverSettings::default();
            let limit = time_limit(limit_flag, config);
            let reports: Vec<JudgeReport> = kernels
                .into_iter()
                .map(|k| judge::judge_cases(k, &samples::catalog(k), &sample_settings, limit))
                .collect();
            if json {
                let text = serde_json::to_string_pretty(&reports)
                    .to_kernel_error("cannot serialize report")?;
                write_line(out, &text)?;
            } else {
                for report in &reports {
                    write_report(out, report, false)?;
                }
            }
            verdict_error(&reports)
        }
    }
}

/// Body of the standalone binaries: stdin in, one line out
pub fn run_standalone(kernel: Kernel, global: &GlobalOpts) -> Result<()> {
    let config = bootstrap(global)?;
    let settings = DriverSettings::from(&config);
    let text = read_input(None)?;
    let output = driver::run(kernel, &text, &settings)?;
    write_line(&mut io::stdout().lock(), &output)
}

/// Report a failed run and terminate with the error's exit code
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        match e.downcast_ref::<KernelError>() {
            Some(kernel_err) => {
                debug!(
                    code = kernel_err.code(),
                    kind = describe_error_code(kernel_err.code()),
                    "error classified"
                );
                eprintln!("Error: {}", kernel_err.user_message());
                std::process::exit(kernel_err.exit_code());
            }
            None => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
