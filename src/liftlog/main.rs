//! The `liftlog` binary only invokes `cli::run()` and turns its outcome into an
//! exit status. Everything user-facing lives in `cli/`.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
