pub mod cache;
pub mod transport;

pub use cache::RecordCache;
pub use transport::UdpTransport;
