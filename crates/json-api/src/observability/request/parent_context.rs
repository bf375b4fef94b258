//! Upstream trace context from `traceparent` headers.

use opentelemetry::{
    Context, global,
    propagation::{Extractor, TextMapPropagator},
    trace::TraceContextExt as _,
};
use salvo::http::{HeaderMap, HeaderName};

/// Context of the caller's span, when the request carries a valid one.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    global::get_text_map_propagator(|propagator| extract_with(propagator, headers))
}

fn extract_with(propagator: &dyn TextMapPropagator, headers: &HeaderMap) -> Option<Context> {
    // Start from an empty context so a request without headers becomes a root span.
    let context = propagator.extract_with_context(&Context::new(), &Headers(headers));

    context
        .span()
        .span_context()
        .is_valid()
        .then_some(context)
}

struct Headers<'a>(&'a HeaderMap);

impl Extractor for Headers<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use salvo::http::HeaderValue;

    use super::*;

    #[test]
    fn requests_without_traceparent_have_no_parent() {
        let headers = HeaderMap::new();

        assert!(
            extract_with(&TraceContextPropagator::new(), &headers).is_none(),
            "expected no parent context"
        );
    }

    #[test]
    fn valid_traceparent_becomes_the_parent() {
        let mut headers = HeaderMap::new();

        headers.insert(
            "traceparent",
            HeaderValue::from_static("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
        );

        let context = extract_with(&TraceContextPropagator::new(), &headers);

        assert_eq!(
            context.map(|context| context.span().span_context().trace_id().to_string()),
            Some("4bf92f3577b34da6a3ce929d0e0e4736".to_string())
        );
    }
}
