// Reusable listener module
// Binds the fixture's TCP listener with address reuse enabled so repeated
// test runs can reclaim the same port without waiting out TIME_WAIT.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` with `SO_REUSEADDR` and `SO_REUSEPORT` enabled.
///
/// The fixture is started and killed over and over by test harnesses;
/// without address reuse every crash would leave the port stuck in
/// TIME_WAIT and the next run would fail to bind.
pub fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR: allow binding a port still in TIME_WAIT from the
    // previous fixture run
    socket.set_reuse_address(true)?;

    // SO_REUSEPORT: tolerate a dying predecessor that has not fully
    // released the socket yet
    socket.set_reuse_port(true)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_port_can_be_rebound_immediately() {
        let first = create_reusable_listener("127.0.0.1:0".parse().unwrap())
            .expect("first bind failed");
        let addr = first.local_addr().expect("no local addr");
        drop(first);

        let second = create_reusable_listener(addr).expect("rebind failed");
        assert_eq!(second.local_addr().expect("no local addr").port(), addr.port());
    }
}
