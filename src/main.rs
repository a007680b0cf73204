//! Checklist CLI - a local checklist manager

use std::process::ExitCode;

fn main() -> ExitCode {
    match checklist_cli::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            checklist_cli::cli::exit_code(&e)
        }
    }
}
