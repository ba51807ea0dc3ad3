//! Entry point for the `wdp` command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;
use wdp_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    init_logging();
    match wdp_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wdp: {err}");
            std::process::exit(1);
        }
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the same subscriber.
#[expect(
    clippy::print_stderr,
    reason = "logging is unavailable when the subscriber fails to install"
)]
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("wdp: logging disabled: {err}");
    }
}
