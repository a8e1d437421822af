//! Logger module
//!
//! stdio logging for the fixture: startup banner, connection lifecycle
//! lines, warnings/errors, and a Common Log Format access line.

use chrono::Local;
use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Stub server started successfully");
    println!("Listening on: http://{addr}");
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Routes:");
    println!("  - GET /health -> 200 \"OK\"");
    println!("  - GET /crash  -> 200 \"DIE\", then exit code 1");
    println!("  - GET <other> -> 404, empty body");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log one handled request
pub fn log_access(remote_addr: &SocketAddr, method: &str, path: &str, status: u16, body_bytes: usize) {
    println!(
        "{}",
        format_common(&remote_addr.to_string(), method, path, status, body_bytes)
    );
}

/// Common Log Format (CLF)
/// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
fn format_common(remote_addr: &str, method: &str, path: &str, status: u16, body_bytes: usize) -> String {
    format!(
        "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
        remote_addr,
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        path,
        status,
        body_bytes,
    )
}

pub fn log_signal(name: &str) {
    println!("\n[SIGNAL] {name} received, shutting down");
}

pub fn log_shutdown() {
    println!("[INFO] Accept loop stopped, exiting with code 0");
}

pub fn log_crash_exit(code: i32) {
    println!("[INFO] Crash route served and flushed, exiting with code {code}");
}
