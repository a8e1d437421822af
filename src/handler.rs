//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! table lookup, and the termination verdict for the crash route.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::net::SocketAddr;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// Outcome of handling a request, reported to the connection layer.
///
/// Process termination is never performed inside the handler. The caller
/// owns the connection and performs the OS-level exit only after the
/// response bytes have been flushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Terminate,
}

/// Main entry point for HTTP request handling
pub fn handle_request<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    state: &AppState,
) -> (Response<Full<Bytes>>, Verdict) {
    let method = req.method();
    let path = req.uri().path();

    // Only GET is served; every other method gets a uniform 405.
    if *method != Method::GET {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return (http::build_405_response(), Verdict::Continue);
    }

    let policy = state.routes.lookup(path);

    if state.config.logging.access_log {
        logger::log_access(
            &peer_addr,
            method.as_str(),
            path,
            policy.status.as_u16(),
            policy.body.len(),
        );
    }

    let verdict = if policy.terminate {
        Verdict::Terminate
    } else {
        Verdict::Continue
    };

    (http::build_policy_response(policy), verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig};
    use hyper::StatusCode;

    fn test_state() -> AppState {
        AppState::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            logging: LoggingConfig { access_log: false },
        })
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().unwrap()
    }

    fn get(path: &str) -> Request<()> {
        Request::builder().method(Method::GET).uri(path).body(()).unwrap()
    }

    #[test]
    fn test_health_responds_without_termination() {
        let state = test_state();
        let (resp, verdict) = handle_request(&get("/health"), peer(), &state);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(verdict, Verdict::Continue);
    }

    #[test]
    fn test_crash_requests_termination_after_response() {
        let state = test_state();
        let (resp, verdict) = handle_request(&get("/crash"), peer(), &state);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Connection"], "close");
        assert_eq!(verdict, Verdict::Terminate);
    }

    #[test]
    fn test_unknown_path_is_404_without_termination() {
        let state = test_state();
        let (resp, verdict) = handle_request(&get("/nope"), peer(), &state);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(verdict, Verdict::Continue);
    }

    #[test]
    fn test_query_string_does_not_affect_matching() {
        let state = test_state();
        let (resp, _) = handle_request(&get("/health?probe=1"), peer(), &state);
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_non_get_methods_get_405() {
        let state = test_state();
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
            let req = Request::builder()
                .method(method.clone())
                .uri("/health")
                .body(())
                .unwrap();
            let (resp, verdict) = handle_request(&req, peer(), &state);
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "method: {method}");
            assert_eq!(verdict, Verdict::Continue);
        }
    }

    #[test]
    fn test_crash_via_non_get_does_not_terminate() {
        let state = test_state();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/crash")
            .body(())
            .unwrap();
        let (_, verdict) = handle_request(&req, peer(), &state);
        assert_eq!(verdict, Verdict::Continue);
    }
}
