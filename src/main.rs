use std::process::ExitCode;

use acyclic::ui::output;

fn main() -> ExitCode {
    match acyclic::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
