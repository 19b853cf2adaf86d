//! UDP transport for the server shell (RFC 1035 §4.2.1)
//!
//! Standard DNS transport. Datagrams are sent as-is (no framing); the
//! shell caps message size at 512 bytes since EDNS(0) is out of scope.

use lynx_dns_application::ports::DatagramTransport;
use lynx_dns_domain::DnsError;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use tracing::debug;

/// Blocking UDP adapter behind the [`DatagramTransport`] port.
pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    pub fn bind(addr: impl ToSocketAddrs) -> Result<Self, DnsError> {
        let socket = UdpSocket::bind(addr)
            .map_err(|e| DnsError::TransportFailure(format!("Failed to bind UDP socket: {}", e)))?;
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DnsError> {
        self.socket
            .local_addr()
            .map_err(|e| DnsError::TransportFailure(e.to_string()))
    }
}

impl DatagramTransport for UdpTransport {
    type Peer = SocketAddr;

    fn receive(&self, buf: &mut [u8]) -> Result<(SocketAddr, usize), DnsError> {
        let (len, peer) = self
            .socket
            .recv_from(buf)
            .map_err(|e| DnsError::TransportFailure(format!("recv_from: {}", e)))?;
        debug!(peer = %peer, bytes = len, "Datagram received");
        Ok((peer, len))
    }

    fn send(&self, buf: &[u8], peer: &SocketAddr) -> Result<usize, DnsError> {
        let sent = self
            .socket
            .send_to(buf, peer)
            .map_err(|e| DnsError::TransportFailure(format!("send_to: {}", e)))?;
        debug!(peer = %peer, bytes = sent, "Datagram sent");
        Ok(sent)
    }
}
