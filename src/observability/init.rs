//! Subscriber setup.

use super::tracer;
use crate::infrastructure::paths::ensure_private_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span export inside the data directory.
pub const TRACE_FILE_NAME: &str = "hackpad-otlp.json";

/// Service name attached to every exported span.
const SERVICE_NAME: &str = "Hackpad";

/// Installs the global tracing subscriber.
///
/// Spans at or above `config.trace_level` (default `info`, any `EnvFilter`
/// directive is accepted) are exported to `<data_dir>/hackpad-otlp.json`.
///
/// Failures are silent: if the data directory cannot be created, the filter
/// directive is invalid, or a subscriber is already installed, the
/// application runs without tracing.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    if ensure_private_dir(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(config.data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
