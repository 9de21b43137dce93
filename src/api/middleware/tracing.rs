//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::{body::Body, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnBodyChunk, DefaultOnEos, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, Span};

type OnRequestFn = fn(&Request<Body>, &Span);
type OnFailureFn = fn(ServerErrorsFailureClass, Duration, &Span);

/// Creates a tracing middleware for HTTP requests.
///
/// Every request opens an `INFO` span carrying method, URI and version, logs
/// `METHOD URI` when it arrives, and logs status and latency when the
/// response is sent. 5xx responses are additionally logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/abc version=HTTP/1.1}: GET /abc
/// INFO request{method=GET uri=/abc version=HTTP/1.1}: finished processing request latency=2 ms status=302
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    OnRequestFn,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    OnFailureFn,
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(log_request as OnRequestFn)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(log_failure as OnFailureFn)
}

fn log_request(request: &Request<Body>, _span: &Span) {
    tracing::info!("{} {}", request.method(), request.uri());
}

fn log_failure(failure: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        classification = %failure,
        latency_ms = latency.as_millis() as u64,
        "Request failed"
    );
}
