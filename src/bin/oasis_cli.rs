use std::process::ExitCode;

use oasis::{cli::run_cli, init};

fn main() -> ExitCode {
    init();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
