/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use once_cell::sync::OnceCell;
use std::env;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Installs the global `tracing` subscriber
///
/// The level comes from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`), defaulting to `INFO`.
/// Safe to call many times; only the first call has an effect.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let level = parse_level(env::var("LOGLEVEL").ok().as_deref());

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        // Another subscriber may already be installed by the embedding program.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn parse_level(value: Option<&str>) -> Level {
    match value.map(|v| v.trim().to_uppercase()).as_deref() {
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("WARN") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        _ => Level::INFO,
    }
}
