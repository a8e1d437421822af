// Connection handling module
// Serves a single accepted connection and carries out the crash route's
// flush-before-exit ordering.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler::{self, Verdict};
use crate::logger;

/// Exit code reported when the crash route has been served.
pub const CRASH_EXIT_CODE: i32 = 1;

/// Accept a connection: log it and hand it to a spawned task.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    if state.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }
    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve a single connection in a spawned task.
///
/// The handler never exits the process itself; it reports a termination
/// verdict, recorded here per connection and acted on only after the
/// hyper connection future has resolved. The crash response carries
/// `Connection: close`, so resolution means the response bytes were
/// written and the socket shut down before the exit happens.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<AppState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let terminate = Arc::new(AtomicBool::new(false));

        let svc_state = Arc::clone(&state);
        let svc_terminate = Arc::clone(&terminate);
        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&svc_state);
                let terminate = Arc::clone(&svc_terminate);
                async move {
                    let (response, verdict) = handler::handle_request(&req, peer_addr, &state);
                    if verdict == Verdict::Terminate {
                        terminate.store(true, Ordering::SeqCst);
                    }
                    Ok::<_, Infallible>(response)
                }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }

        if terminate.load(Ordering::SeqCst) {
            logger::log_crash_exit(CRASH_EXIT_CODE);
            std::process::exit(CRASH_EXIT_CODE);
        }
    });
}
