use clap::Parser;
use judge_kernels::cli::{self, StandaloneCli};
use judge_kernels::driver::Kernel;

fn main() {
    let args = StandaloneCli::parse();
    cli::exit_on_error(
        cli::run_standalone(Kernel::TwoSum, &args.global).map_err(anyhow::Error::from),
    );
}
