use thiserror::Error;

/// Protocol-level failures. Every decode error is fatal to the current
/// message only; a serving loop recovers and waits for the next datagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Message is not a query (QR bit set)")]
    NotAQuery,

    #[error("Message compression is not supported")]
    CompressionUnsupported,

    #[error("Transport failure: {0}")]
    TransportFailure(String),
}
