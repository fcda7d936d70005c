// Logging module for structured logging using the tracing crate

use std::error::Error;

/// Initialize the tracing subscriber for structured logging
///
/// Log level defaults to `info` and can be overridden with `RUST_LOG`.
/// actix-server worker chatter is demoted to `warn` so request logs stay
/// readable.
pub fn init_subscriber() -> Result<(), Box<dyn Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info")
            .add_directive("actix_server::worker=warn".parse().expect("static directive"))
            .add_directive("actix_server::accept=warn".parse().expect("static directive"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e as Box<dyn Error>)?;

    Ok(())
}
