//! Tracing subscriber setup.
//!
//! `init_tracing` installs an env-filtered fmt subscriber;
//! `init_tracing_with_otel` additionally layers an OpenTelemetry tracer
//! so span attributes flow to whatever exporter the SDK provider is
//! configured with. Both are idempotent: a second call is a no-op.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install an env-filtered fmt subscriber for the process.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer())
        .try_init();
}

/// Install the fmt subscriber plus an OpenTelemetry layer backed by the
/// given SDK tracer provider.
pub fn init_tracing_with_otel(provider: &TracerProvider) {
    let tracer = provider.tracer("span-attrs");
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init();
}
