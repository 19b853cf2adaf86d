use crate::errors::DnsError;
use crate::name::DomainName;
use crate::wire::{self, WireReader};

/// One entry of the question section (RFC 1035 §4.1.2): QNAME followed by
/// two big-endian 16-bit fields, QTYPE and QCLASS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self, DnsError> {
        let qname = DomainName::parse(reader)?;
        let qtype = reader.read_u16()?;
        let qclass = reader.read_u16()?;
        Ok(Self {
            qname,
            qtype,
            qclass,
        })
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        self.qname.encode(out);
        wire::put_u16(out, self.qtype);
        wire::put_u16(out, self.qclass);
    }
}
