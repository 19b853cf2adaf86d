use crate::name::DomainName;
use crate::wire;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// QTYPE `*`: matches records of every type (RFC 1035 §3.2.3).
pub const QTYPE_ANY: u16 = 255;

/// The Internet class.
pub const CLASS_IN: u16 = 1;

/// TTL of the canned placeholder answers.
const DEFAULT_ANSWER_TTL: u32 = 17800;

/// The closed set of record types this server models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    TXT,
    AAAA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::AAAA => "AAAA",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            other => Err(format!("Unknown record type '{}'", other)),
        }
    }
}

/// Type-specific rdata. The layouts this server answers with: a 32-bit
/// address for A, a 128-bit address for AAAA, a domain name for CNAME/NS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(DomainName),
    Ns(DomainName),
}

/// One resource record: the fixed prefix fields shared by every type plus
/// the type-specific rdata. The type tag and RDLENGTH are derived from the
/// data, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(data: RecordData, ttl: u32) -> Self {
        Self {
            class: CLASS_IN,
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match &self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Ns(_) => RecordType::NS,
        }
    }

    pub fn rdlength(&self) -> u16 {
        match &self.data {
            RecordData::A(_) => 4,
            RecordData::Aaaa(_) => 16,
            RecordData::Cname(name) | RecordData::Ns(name) => name.encoded_len() as u16,
        }
    }

    /// Wire size of this record when encoded under `owner`.
    pub fn encoded_len(&self, owner: &DomainName) -> usize {
        // owner + type(2) + class(2) + ttl(4) + rdlength(2) + rdata
        owner.encoded_len() + 10 + self.rdlength() as usize
    }

    /// Emits `owner, type, class, ttl, rdlength, rdata`, all multi-byte
    /// fields big-endian. The owner name is written in full: compression
    /// pointers are as unsupported on the encode side as on decode.
    pub fn encode(&self, owner: &DomainName, out: &mut Vec<u8>) {
        owner.encode(out);
        wire::put_u16(out, self.record_type().to_u16());
        wire::put_u16(out, self.class);
        wire::put_u32(out, self.ttl);
        wire::put_u16(out, self.rdlength());
        match &self.data {
            RecordData::A(addr) => out.extend_from_slice(&addr.octets()),
            RecordData::Aaaa(addr) => out.extend_from_slice(&addr.octets()),
            RecordData::Cname(name) | RecordData::Ns(name) => name.encode(out),
        }
    }

    /// Exact type-tag match, or anything under the `ANY` wildcard qtype.
    pub fn matches_qtype(&self, qtype: u16) -> bool {
        qtype == QTYPE_ANY || self.record_type().to_u16() == qtype
    }

    /// Canned placeholder A answer: 119.29.29.29, TTL 17800.
    pub fn default_a() -> Self {
        Self::new(RecordData::A(Ipv4Addr::new(119, 29, 29, 29)), DEFAULT_ANSWER_TTL)
    }

    /// Canned placeholder AAAA answer: 2402:e00::, TTL 17800.
    pub fn default_aaaa() -> Self {
        Self::new(
            RecordData::Aaaa(Ipv6Addr::new(0x2402, 0x0e00, 0, 0, 0, 0, 0, 0)),
            DEFAULT_ANSWER_TTL,
        )
    }
}
