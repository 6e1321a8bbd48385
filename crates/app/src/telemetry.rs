//! Tracing setup for the console binary.
//!
//! - `LOG_LEVEL` holds an `EnvFilter` directive (default `warn`).
//! - `LOG_FORMAT=json` switches to JSON lines; anything else is the plain format.
//!
//! Logs are written to stderr; stdout carries only the quiz itself.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
