//! Structured logs, OTLP span export and Prometheus request metrics.
//!
//! [`Observability::init`] installs the subscriber once at startup. The
//! [`request_logging`] hoop wraps every route with a span, a completion log
//! line and the request histogram served by [`metrics_handler`].

use thiserror::Error;

mod init;
mod logging;
mod metrics;
mod otel;
mod request;
mod settings;

pub(crate) use init::Observability;
pub(crate) use metrics::metrics_handler;
pub(crate) use request::request_logging;

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// The trace sample ratio is not a share between 0 and 1.
    #[error("trace sample ratio must be between 0.0 and 1.0, got {0}")]
    SampleRatio(f64),

    /// Failed to build OTLP exporter.
    #[error("failed to build OTLP exporter: {0}")]
    OtlpExporter(#[from] opentelemetry_otlp::ExporterBuildError),

    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
