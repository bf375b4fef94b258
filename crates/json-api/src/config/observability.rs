//! Logging, tracing and request timing settings

use std::time::Duration;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Tracing and request timing settings.
///
/// Logs and `/metrics` work without a collector. Span export is opt-in so a
/// shop running next to nothing but Postgres starts cleanly.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Export request spans over OTLP. Disabled by default.
    #[arg(long, env = "OTEL_ENABLED", default_value_t = false)]
    pub otel_enabled: bool,

    /// Continue traces from incoming `traceparent` headers. Only applies when
    /// span export is enabled.
    #[arg(long, env = "OTEL_PARENT_PROPAGATION_ENABLED", default_value_t = false)]
    pub otel_parent_propagation_enabled: bool,

    /// OTLP gRPC collector endpoint.
    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub otel_exporter_otlp_endpoint: String,

    /// OTLP export timeout in seconds.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3)]
    pub otel_exporter_otlp_timeout_seconds: u64,

    /// Service name reported on every span.
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "storefront-json")]
    pub otel_service_name: String,

    /// Namespace grouping the storefront's services in a collector.
    #[arg(long, env = "OTEL_SERVICE_NAMESPACE", default_value = "storefront")]
    pub otel_service_namespace: String,

    /// Service version reported on every span.
    #[arg(
        long,
        env = "OTEL_SERVICE_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub otel_service_version: String,

    /// Deployment environment, e.g. `development` or `production`.
    #[arg(
        long,
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub otel_deployment_environment: String,

    /// Share of root traces to keep, between 0.0 and 1.0.
    #[arg(long, env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0)]
    pub otel_trace_sample_ratio: f64,

    /// Requests slower than this are logged at `warn`.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl ObservabilityConfig {
    /// Whether incoming trace context should be honoured.
    #[must_use]
    pub fn propagates_parent_context(&self) -> bool {
        self.otel_enabled && self.otel_parent_propagation_enabled
    }

    /// OTLP export timeout.
    #[must_use]
    pub fn exporter_timeout(&self) -> Duration {
        Duration::from_secs(self.otel_exporter_otlp_timeout_seconds)
    }

    /// The configured sample ratio, or `None` when it falls outside `[0.0, 1.0]`.
    #[must_use]
    pub fn sample_ratio(&self) -> Option<f64> {
        Some(self.otel_trace_sample_ratio).filter(|ratio| (0.0..=1.0).contains(ratio))
    }
}
