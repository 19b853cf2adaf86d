//! Lynx DNS Application Layer
//!
//! Ports for the record store and the datagram transport, the
//! response-assembly use case, and the single-cycle server shell.
pub mod ports;
pub mod server;
pub mod use_cases;

pub use ports::{DatagramTransport, RecordStore};
pub use server::{CycleOutcome, DnsServer};
pub use use_cases::HandleDnsQueryUseCase;
