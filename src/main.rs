use std::process::ExitCode;

use clap::Parser;
use ordinal::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    ordinal::logging::init();

    let args = Arguments::parse();

    match ordinal::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
