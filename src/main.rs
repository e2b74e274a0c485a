//! Flag submitter - example flag submission plugin

use std::process::ExitCode;

fn main() -> ExitCode {
    match flag_submitter::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
