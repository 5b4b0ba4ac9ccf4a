use std::io;
use tracing::{debug, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const CRATE_TARGET: &str = "eventmap";

/// Logs this crate at `level` and everything else at WARN, to stdout.
pub fn setup_tracing(level: Level) {
    let filter = filter::Targets::new()
        .with_target(CRATE_TARGET, level)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    match registry.try_init() {
        Ok(_) => debug!("Tracing initialized at {}", level),
        Err(err) => eprintln!("Tracing was already initialized: {err}"),
    }
}
