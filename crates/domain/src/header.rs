use crate::errors::DnsError;
use crate::wire::{self, WireReader};

/// Fixed size of the header section (RFC 1035 §4.1.1).
pub const HEADER_LEN: usize = 12;

//                                 1  1  1  1  1  1
//   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//  +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//  |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//  +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
pub const FLAG_QR: u16 = 0x8000;
pub const OPCODE_MASK: u16 = 0x7800;
pub const FLAG_AA: u16 = 0x0400;
pub const FLAG_TC: u16 = 0x0200;
pub const FLAG_RD: u16 = 0x0100;
pub const FLAG_RA: u16 = 0x0080;
pub const RCODE_MASK: u16 = 0x000F;

pub const RCODE_NOERROR: u16 = 0;
pub const RCODE_FORMERR: u16 = 1;
pub const RCODE_NXDOMAIN: u16 = 3;
pub const RCODE_NOTIMP: u16 = 4;

/// The fixed 12-octet message header. A passive value: all six fields are
/// byte-swapped out of network order on decode and never mutated.
///
/// Direction and opcode validation belong to [`crate::DnsQuery::decode`],
/// not this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl MessageHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DnsError> {
        if reader.remaining() < HEADER_LEN {
            return Err(DnsError::MalformedMessage(format!(
                "header needs {} octets, got {}",
                HEADER_LEN,
                reader.remaining()
            )));
        }
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            qd_count: reader.read_u16()?,
            an_count: reader.read_u16()?,
            ns_count: reader.read_u16()?,
            ar_count: reader.read_u16()?,
        })
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        wire::put_u16(out, self.id);
        wire::put_u16(out, self.flags);
        wire::put_u16(out, self.qd_count);
        wire::put_u16(out, self.an_count);
        wire::put_u16(out, self.ns_count);
        wire::put_u16(out, self.ar_count);
    }

    /// QR bit: response (1) vs query (0).
    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> 11) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    pub fn rcode(&self) -> u16 {
        self.flags & RCODE_MASK
    }

    /// True when a query carries answer/authority/additional entries; those
    /// sections are left undecoded (a non-fatal anomaly the caller reports).
    pub fn has_extra_sections(&self) -> bool {
        self.an_count != 0 || self.ns_count != 0 || self.ar_count != 0
    }
}
