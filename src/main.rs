use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use gotest_ls::cli::{self, Args};
use gotest_ls::logging::{self, Verbosity};
use gotest_ls::{discover, OutputFormatter};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.requires_help() {
        cli::print_help().context("failed to print help")?;
        return Ok(());
    }

    let config = args.validate()?;
    let tests = discover(&config)?;
    let output = OutputFormatter::format(&tests, &args.output_options())?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write output")?;

    Ok(())
}
