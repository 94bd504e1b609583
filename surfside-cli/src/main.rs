//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use surfside_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported to the terminal"
)]
fn main() {
    if let Err(err) = surfside_cli::init_logging() {
        eprintln!("surfside: {err}");
    }
    match surfside_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("surfside: {err}");
            std::process::exit(1);
        }
    }
}
