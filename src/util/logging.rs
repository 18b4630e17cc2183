use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "recell=info";

/// Installs the global tracing subscriber. Call once, before launching the UI.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    match result {
        Ok(()) => tracing::info!(version = %super::version::version_label(), "logging initialised"),
        Err(err) => eprintln!("Failed to install tracing subscriber: {err}"),
    }
}
