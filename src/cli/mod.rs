//! Console front end.
//!
//! Argument parsing, rendering and the interactive session. Thin: all
//! game decisions happen in `game` and `proof`.

pub mod args;
pub mod render;
pub mod session;

pub use args::{PlayArgs, VerifyArgs, USAGE};
pub use session::{Session, SessionError, SessionOutcome};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Logs go to stderr so stdout
/// carries only the game transcript.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
