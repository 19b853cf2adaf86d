use lynx_dns_domain::DnsError;

/// Port for blocking datagram I/O injected into the server shell, generic
/// over the transport's peer-address type.
///
/// Both operations block; OS-level failures surface as
/// [`DnsError::TransportFailure`] and abort the current cycle only.
pub trait DatagramTransport {
    type Peer;

    /// Blocks until a datagram arrives. Returns the peer it came from and
    /// the number of bytes written into `buf`.
    fn receive(&self, buf: &mut [u8]) -> Result<(Self::Peer, usize), DnsError>;

    /// Blocks until the payload is handed to the OS. Returns the number of
    /// bytes sent.
    fn send(&self, buf: &[u8], peer: &Self::Peer) -> Result<usize, DnsError>;
}

/// Both operations take `&self`, so a shared reference is itself a
/// transport. Lets a caller keep hold of the concrete transport while the
/// server shell owns its copy.
impl<T: DatagramTransport> DatagramTransport for &T {
    type Peer = T::Peer;

    fn receive(&self, buf: &mut [u8]) -> Result<(Self::Peer, usize), DnsError> {
        (**self).receive(buf)
    }

    fn send(&self, buf: &[u8], peer: &Self::Peer) -> Result<usize, DnsError> {
        (**self).send(buf, peer)
    }
}
