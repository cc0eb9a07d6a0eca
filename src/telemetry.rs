use tracing::{Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

// bunyan-style json logs written to `sink`.
// RUST_LOG wins over `env_filter` when it is set
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        // keeps span fields around so they show up on every event inside the span
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// # Panics
/// if a global subscriber or logger was already installed
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    // `log` records from sqlx and friends get forwarded into tracing
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
