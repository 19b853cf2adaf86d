use crate::errors::DnsError;
use crate::wire::WireReader;
use std::fmt;
use std::str::FromStr;

/// Longest label allowed by RFC 1035 §2.3.4. A length octet above this has
/// its two high bits set, which on the wire marks a compression pointer.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, length octets and root octet included.
pub const MAX_NAME_LEN: usize = 255;

/// A domain name as an ordered sequence of labels, built once while
/// decoding and immutable afterwards.
///
/// Labels are ASCII-lowercased at decode time so the canonical [`Display`]
/// form (`"example.com."`, every non-empty label followed by a dot) can
/// serve directly as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Decodes a name from the reader position: a run of length-prefixed
    /// labels terminated by the zero octet of the root label.
    ///
    /// A length octet above 63 is a compression pointer (RFC 1035 §4.1.4)
    /// and fails the decode with [`DnsError::CompressionUnsupported`]; it is
    /// never dereferenced, and no byte past it is interpreted as name data.
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self, DnsError> {
        let mut labels = Vec::new();
        let mut wire_len = 0usize;
        loop {
            let len = reader.read_u8()? as usize;
            wire_len += 1;
            if len == 0 {
                break;
            }
            if len > MAX_LABEL_LEN {
                return Err(DnsError::CompressionUnsupported);
            }
            wire_len += len;
            // The terminating root octet still has to fit under the cap.
            if wire_len + 1 > MAX_NAME_LEN {
                return Err(DnsError::MalformedMessage(format!(
                    "domain name exceeds {} octets",
                    MAX_NAME_LEN
                )));
            }
            let label = reader.take(len)?;
            labels.push(label.iter().map(|b| b.to_ascii_lowercase()).collect());
        }
        Ok(Self { labels })
    }

    /// Emits the length-prefixed label run plus the terminating root octet.
    pub fn encode(&self, out: &mut Vec<u8>) {
        for label in &self.labels {
            out.push(label.len() as u8);
            out.extend_from_slice(label);
        }
        out.push(0);
    }

    /// Wire size of the encoded name.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1
    }

    /// Canonical cache-key form, identical to [`Display`].
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            f.write_str(&String::from_utf8_lossy(label))?;
            f.write_str(".")?;
        }
        Ok(())
    }
}

/// Builds a name from presentation form (`"www.example.com"`, with or
/// without a trailing dot). Used by the configuration population path.
impl FromStr for DomainName {
    type Err = DnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut labels: Vec<Vec<u8>> = Vec::new();
        for label in s.split('.').filter(|label| !label.is_empty()) {
            if label.len() > MAX_LABEL_LEN {
                return Err(DnsError::MalformedMessage(format!(
                    "label '{}' exceeds {} octets",
                    label, MAX_LABEL_LEN
                )));
            }
            labels.push(label.to_ascii_lowercase().into_bytes());
        }
        let name = Self { labels };
        if name.encoded_len() > MAX_NAME_LEN {
            return Err(DnsError::MalformedMessage(format!(
                "domain name '{}' exceeds {} octets",
                s, MAX_NAME_LEN
            )));
        }
        Ok(name)
    }
}
