//! OpenTelemetry tracer provider setup.

use opentelemetry::KeyValue;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};
use storefront::money::currency_code;

use crate::config::observability::ObservabilityConfig;

use super::ObservabilityError;

pub(super) fn build_tracer_provider(
    config: &ObservabilityConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let sampler = sampler(config)?;

    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otel_exporter_otlp_endpoint.clone())
        .with_timeout(config.exporter_timeout())
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler)
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(service_resource(config))
        .with_batch_exporter(exporter)
        .build())
}

/// Root spans follow the configured ratio; child spans follow their parent.
fn sampler(config: &ObservabilityConfig) -> Result<Sampler, ObservabilityError> {
    let ratio = config
        .sample_ratio()
        .ok_or(ObservabilityError::SampleRatio(config.otel_trace_sample_ratio))?;

    Ok(Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(ratio))))
}

fn service_resource(config: &ObservabilityConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(config.otel_service_name.clone())
        .with_attributes([
            KeyValue::new("service.namespace", config.otel_service_namespace.clone()),
            KeyValue::new("service.version", config.otel_service_version.clone()),
            KeyValue::new(
                "deployment.environment.name",
                config.otel_deployment_environment.clone(),
            ),
            KeyValue::new("storefront.currency", currency_code()),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use opentelemetry::{Key, Value};
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        observability: ObservabilityConfig,
    }

    fn config(args: &[&str]) -> Result<ObservabilityConfig, clap::Error> {
        Cli::try_parse_from(std::iter::once("storefront-json").chain(args.iter().copied()))
            .map(|cli| cli.observability)
    }

    #[test]
    fn resource_describes_the_storefront() -> TestResult {
        let resource = service_resource(&config(&["--otel-deployment-environment", "staging"])?);

        let attribute = |key: &'static str| resource.get(&Key::from_static_str(key));

        assert_eq!(attribute("service.name"), Some(Value::from("storefront-json")));
        assert_eq!(attribute("service.namespace"), Some(Value::from("storefront")));
        assert_eq!(attribute("deployment.environment.name"), Some(Value::from("staging")));
        assert_eq!(attribute("storefront.currency"), Some(Value::from("INR")));

        Ok(())
    }

    #[test]
    fn out_of_range_sample_ratio_is_rejected() -> TestResult {
        let result = sampler(&config(&["--otel-trace-sample-ratio", "1.5"])?);

        assert!(
            matches!(result, Err(ObservabilityError::SampleRatio(ratio)) if (ratio - 1.5).abs() < f64::EPSILON),
            "{result:?}"
        );

        assert!(sampler(&config(&["--otel-trace-sample-ratio", "0.1"])?).is_ok());

        Ok(())
    }
}
