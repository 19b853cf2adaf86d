use crate::errors::DnsError;
use crate::header::MessageHeader;
use crate::question::Question;
use crate::wire::WireReader;

/// A fully decoded request datagram.
///
/// Owns the raw received bytes alongside the decoded header and ordered
/// question list; `question_end` marks the offset where the question
/// section stops so a response can echo the section verbatim. Read-only
/// after construction, discarded once a response has been produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    raw: Vec<u8>,
    header: MessageHeader,
    questions: Vec<Question>,
    question_end: usize,
}

impl DnsQuery {
    /// Decodes one received datagram.
    ///
    /// * [`DnsError::MalformedMessage`] — fewer than 12 header octets, or a
    ///   question cut off mid-label or mid-field. The buffer is never read
    ///   out of bounds.
    /// * [`DnsError::NotAQuery`] — the QR bit marks a response; no partial
    ///   question list escapes.
    /// * [`DnsError::CompressionUnsupported`] — a compression pointer in a
    ///   QNAME.
    ///
    /// Nonzero answer/authority/additional counts are not an error: those
    /// sections are left undecoded and the anomaly is the caller's to
    /// report (see [`MessageHeader::has_extra_sections`]). The decoder
    /// mutates nothing beyond its own allocation.
    pub fn decode(raw: Vec<u8>) -> Result<Self, DnsError> {
        let mut reader = WireReader::new(&raw);
        let header = MessageHeader::decode(&mut reader)?;
        if header.is_response() {
            return Err(DnsError::NotAQuery);
        }

        let mut questions = Vec::with_capacity(header.qd_count as usize);
        for _ in 0..header.qd_count {
            questions.push(Question::parse(&mut reader)?);
        }
        let question_end = reader.position();

        Ok(Self {
            raw,
            header,
            questions,
            question_end,
        })
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Byte offset in the raw datagram where the question section ends.
    pub fn question_end(&self) -> usize {
        self.question_end
    }
}
