//! Tracing subscriber setup.

use super::{tracer, SERVICE_NAME, TRACE_FILE_NAME};
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber: an [`EnvFilter`] built from
/// `config.trace_level` feeding an OpenTelemetry layer that exports to the
/// trace file.
///
/// Best-effort and idempotent. If the data directory cannot be created the
/// plugin runs without tracing, and only the first successful call installs
/// a subscriber.
///
/// # Example
///
/// ```no_run
/// use staffdesk::observability::init_tracing;
/// use staffdesk::Config;
///
/// let config = Config { trace_level: "debug".to_string(), ..Config::default() };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            level = %config.trace_level,
            base_url = %config.base_url,
            version = env!("CARGO_PKG_VERSION"),
            "tracing initialized"
        );
    }
}
