//! Lynx DNS Domain Layer
//!
//! Pure RFC 1035 wire-format model: no I/O, no logging, no shared state.
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod header;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, LocalRecord};
pub use dns_query::DnsQuery;
pub use errors::DnsError;
pub use header::MessageHeader;
pub use name::DomainName;
pub use question::Question;
pub use record::{RecordData, RecordType, ResourceRecord};
