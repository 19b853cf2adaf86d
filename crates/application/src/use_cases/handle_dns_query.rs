use crate::ports::RecordStore;
use lynx_dns_domain::header::{self, MessageHeader, HEADER_LEN};
use lynx_dns_domain::wire::MAX_UDP_MESSAGE_LEN;
use lynx_dns_domain::{DnsQuery, DomainName, ResourceRecord};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A fully serialized reply datagram plus what went into it.
#[derive(Debug)]
pub struct AssembledResponse {
    pub bytes: Vec<u8>,

    /// Records actually serialized into the answer section.
    pub answer_count: u16,

    /// True when matching records were withheld to stay under the 512-byte
    /// UDP ceiling; the TC bit is set in `bytes` accordingly.
    pub truncated: bool,

    pub rcode: u16,
}

/// Looks every decoded question up in the record store and assembles the
/// reply datagram.
pub struct HandleDnsQueryUseCase {
    store: Arc<dyn RecordStore>,
}

impl HandleDnsQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Assembles the reply for a decoded query.
    ///
    /// Reply header: query id echoed, QR=1, opcode and RD copied, RCODE 0
    /// when at least one record matched across all questions, RCODE 3
    /// (NXDOMAIN) when a single-question query matched nothing. The
    /// question section is echoed verbatim from the raw query bytes, then
    /// each matching record follows in wire layout. Answers that would push
    /// the datagram past 512 octets are withheld and the TC bit is set —
    /// the ceiling is never silently exceeded.
    pub fn execute(&self, query: &DnsQuery) -> AssembledResponse {
        let request = query.header();
        if request.has_extra_sections() {
            warn!(
                an_count = request.an_count,
                ns_count = request.ns_count,
                ar_count = request.ar_count,
                "Query carries non-question sections, ignored"
            );
        }

        let mut matched: Vec<(DomainName, ResourceRecord)> = Vec::new();
        for question in query.questions() {
            let name = question.qname.canonical();
            let records = self.store.lookup(&name);
            let hits_before = matched.len();
            for record in records {
                if record.matches_qtype(question.qtype) {
                    matched.push((question.qname.clone(), record));
                }
            }
            info!(
                id = request.id,
                question = %name,
                qtype = question.qtype,
                qclass = question.qclass,
                matches = matched.len() - hits_before,
                "Question looked up"
            );
        }

        let rcode = if matched.is_empty() && query.questions().len() == 1 {
            header::RCODE_NXDOMAIN
        } else {
            header::RCODE_NOERROR
        };

        let question_section = &query.raw()[HEADER_LEN..query.question_end()];
        let prefix_len = HEADER_LEN + question_section.len();

        let mut answer_bytes = Vec::new();
        let mut answer_count: u16 = 0;
        let mut truncated = false;
        for (owner, record) in &matched {
            let record_len = record.encoded_len(owner);
            if prefix_len + answer_bytes.len() + record_len > MAX_UDP_MESSAGE_LEN {
                truncated = true;
                break;
            }
            record.encode(owner, &mut answer_bytes);
            answer_count += 1;
        }
        if truncated {
            debug!(
                matched = matched.len(),
                included = answer_count,
                "Answer section truncated at the UDP ceiling"
            );
        }

        let mut flags = header::FLAG_QR
            | (request.flags & (header::OPCODE_MASK | header::FLAG_RD))
            | rcode;
        if truncated {
            flags |= header::FLAG_TC;
        }
        let reply_header = MessageHeader {
            id: request.id,
            flags,
            qd_count: request.qd_count,
            an_count: answer_count,
            ns_count: 0,
            ar_count: 0,
        };

        let mut bytes = Vec::with_capacity(prefix_len + answer_bytes.len());
        reply_header.encode(&mut bytes);
        bytes.extend_from_slice(question_section);
        bytes.extend_from_slice(&answer_bytes);

        AssembledResponse {
            bytes,
            answer_count,
            truncated,
            rcode,
        }
    }
}
