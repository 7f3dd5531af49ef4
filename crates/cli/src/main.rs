use std::process::ExitCode;

use clap::Parser;

mod args;
mod printer;
mod prompt;
mod run;

use args::Cli;
use filetop_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    run::run(cli)
}
