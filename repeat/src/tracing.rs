//! Logging and trace export setup.

use miette::{IntoDiagnostic, WrapErr};
use opentelemetry::InstrumentationScope;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config;

/// Builds a tracer provider that batches spans and exports them over OTLP/HTTP.
///
/// # Errors
///
/// Returns an error if the OTLP exporter cannot be built.
pub fn tracer_provider() -> miette::Result<SdkTracerProvider> {
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .build()
        .into_diagnostic()
        .wrap_err("building otlp http exporter failed")?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .with_resource(
            Resource::builder()
                .with_service_name(env!("CARGO_PKG_NAME"))
                .build(),
        )
        .build())
}

/// Initializes the global subscriber.
///
/// Logs are written to stderr as JSON, filtered by `RUST_LOG` (default `repeat=debug`). When
/// `tracing.enabled` is set, spans are also exported over OTLP/HTTP and the provider doing so is
/// returned. It has to be shut down before the process exits or buffered spans are lost.
///
/// # Errors
///
/// Returns an error if the OTLP exporter cannot be built or a global subscriber is already set.
pub fn try_init(tracing: &config::TracingConfig) -> miette::Result<Option<SdkTracerProvider>> {
    let provider = tracing.enabled.then(tracer_provider).transpose()?;

    let telemetry_layer = provider.as_ref().map(|provider| {
        let scope = InstrumentationScope::builder(env!("CARGO_PKG_NAME"))
            .with_version(env!("CARGO_PKG_VERSION"))
            .build();

        tracing_opentelemetry::layer().with_tracer(provider.tracer_with_scope(scope))
    });

    // Replies go to stdout, so keep the logs out of the way.
    let stderr_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repeat=debug".into()),
        )
        .with(telemetry_layer)
        .with(stderr_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("could not init registry")?;

    info!(otlp = tracing.enabled, "tracing initialized");

    Ok(provider)
}

/// Flushes and stops span export.
///
/// # Errors
///
/// Returns an error if the remaining spans could not be exported.
pub fn shutdown(provider: SdkTracerProvider) -> miette::Result<()> {
    debug!("shutting down tracer provider");

    provider
        .shutdown()
        .into_diagnostic()
        .wrap_err("could not flush spans")
}
