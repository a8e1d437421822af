// Server module entry point
// Listener binding, accept loop, per-connection serving and signal handling

pub mod connection;
pub mod listener;
pub mod run;
pub mod signal;

pub use listener::create_reusable_listener;
pub use run::start_server_loop;
pub use signal::start_signal_handler;
