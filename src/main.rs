use clap::Parser;
use judge_kernels::cli::{self, Cli};
use std::io;

fn main() {
    let args = Cli::parse();

    let result = cli::bootstrap(&args.global)
        .and_then(|config| cli::execute(args.command, &config, &mut io::stdout().lock()));

    cli::exit_on_error(result.map_err(anyhow::Error::from));
}
