//! HTTP response building module
//!
//! Builders for the fixture's canned responses, decoupled from routing.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::routing::RoutePolicy;

/// Build a response from a matched route policy.
///
/// Terminating policies carry `Connection: close` so hyper shuts the
/// connection down right after writing the body; the caller performs the
/// process exit only once that write has completed.
pub fn build_policy_response(policy: &RoutePolicy) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(policy.status)
        .header("Content-Type", "text/plain")
        .header("Content-Length", policy.body.len());

    if policy.terminate {
        builder = builder.header("Connection", "close");
    }

    builder
        .body(Full::new(policy.body.clone()))
        .unwrap_or_else(|e| {
            log_build_error(policy.status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
