//! Lynx DNS Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the shared record
//! cache and the UDP datagram transport.
pub mod dns;
