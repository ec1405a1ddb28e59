mod app;

use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: error: {:#}", env!("CARGO_PKG_NAME"), err);
            ExitCode::FAILURE
        }
    }
}
