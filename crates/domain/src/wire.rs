//! Bounds-checked reads and writes over raw datagram bytes.
//!
//! All multi-byte DNS fields are big-endian on the wire (RFC 1035 §2.3.2);
//! every read here converts to host order via `from_be_bytes`, and a read
//! past the end of the buffer fails with [`DnsError::MalformedMessage`]
//! instead of touching memory out of bounds.

use crate::errors::DnsError;

/// Largest UDP DNS message without EDNS0 (RFC 1035 §4.2.1). Both the
/// receive buffer and an assembled response are capped here.
pub const MAX_UDP_MESSAGE_LEN: usize = 512;

/// Cursor over a received datagram.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_u8(&mut self) -> Result<u8, DnsError> {
        let byte = *self.buf.get(self.pos).ok_or_else(|| underrun(self.pos, 1))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DnsError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DnsError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Consumes the next `len` bytes as a sub-slice of the original buffer.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DnsError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| underrun(self.pos, len))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

fn underrun(pos: usize, wanted: usize) -> DnsError {
    DnsError::MalformedMessage(format!(
        "need {} byte(s) at offset {}, buffer exhausted",
        wanted, pos
    ))
}

pub fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}
