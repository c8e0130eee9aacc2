//! Log output on stderr via `tracing-subscriber`
//!
//! The level comes from the `-v` / `-q` flags only; `RUST_LOG` is ignored.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity flags
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn setup_logging(verbose: u8, quiet: bool) {
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(verbose, quiet)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
