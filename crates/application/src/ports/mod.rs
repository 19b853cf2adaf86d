mod record_store;
mod transport;

pub use record_store::RecordStore;
pub use transport::DatagramTransport;
