//! Log output for the empdesk binary
//!
//! One subscriber: an `EnvFilter`, compact console output, and (with the
//! `telemetry` feature and `--otel`) an OTLP span exporter.
//!
//! `RUST_LOG` replaces the built-in directives entirely. The OTLP endpoint
//! and service name come from `OTEL_EXPORTER_OTLP_ENDPOINT` and
//! `OTEL_SERVICE_NAME`.

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Switches taken from the global CLI flags
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

/// Filter used when `RUST_LOG` is unset.
///
/// Request lines come from `tower_http`; sqlx statement logging stays at
/// warn unless debugging, where each query shows up.
fn default_directives(debug: bool) -> &'static str {
    if debug {
        "info,empdesk=debug,empdesk_server=debug,tower_http=debug,sqlx=info"
    } else {
        "warn,empdesk=info,empdesk_server=info,tower_http=info,sqlx=warn"
    }
}

fn env_filter(config: &TracingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directives(config.debug))
            .map_err(|err| anyhow!("invalid log filter: {err}")),
    }
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(console)
        .with(otlp::layer(config.otel)?)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    if config.otel {
        otlp::announce();
    }
    Ok(())
}

/// Flush spans still queued for export.
pub fn shutdown_otel() {
    otlp::shutdown();
}

#[cfg(feature = "telemetry")]
mod otlp {
    use anyhow::{anyhow, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::{Tracer, TracerProvider};
    use tracing::Subscriber;
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::registry::LookupSpan;

    const DEFAULT_ENDPOINT: &str = "http://localhost:4317";
    const DEFAULT_SERVICE: &str = "empdesk";

    fn endpoint() -> String {
        std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into())
    }

    fn service_name() -> String {
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE.into())
    }

    pub fn layer<S>(enabled: bool) -> Result<Option<OpenTelemetryLayer<S, Tracer>>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        if !enabled {
            return Ok(None);
        }

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint())
            .build()
            .map_err(|err| anyhow!("Failed to create OTLP exporter: {err}"))?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
                "service.name",
                service_name(),
            )]))
            .build();

        let tracer = provider.tracer(DEFAULT_SERVICE);
        // The global handle keeps the batch exporter alive until shutdown
        let _ = opentelemetry::global::set_tracer_provider(provider);

        Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer)))
    }

    pub fn announce() {
        tracing::info!(endpoint = %endpoint(), service = %service_name(), "exporting spans over OTLP");
    }

    pub fn shutdown() {
        opentelemetry::global::shutdown_tracer_provider();
    }
}

#[cfg(not(feature = "telemetry"))]
mod otlp {
    use anyhow::Result;
    use tracing_subscriber::layer::Identity;

    pub fn layer(_enabled: bool) -> Result<Option<Identity>> {
        Ok(None)
    }

    pub fn announce() {
        tracing::warn!("--otel ignored: empdesk was built without the `telemetry` feature");
    }

    pub fn shutdown() {}
}
