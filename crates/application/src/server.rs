use crate::ports::{DatagramTransport, RecordStore};
use crate::use_cases::HandleDnsQueryUseCase;
use lynx_dns_domain::header::{self, MessageHeader, HEADER_LEN};
use lynx_dns_domain::wire::MAX_UDP_MESSAGE_LEN;
use lynx_dns_domain::{DnsError, DnsQuery};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one receive→decode→lookup→respond→send cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A well-formed query was answered.
    Answered {
        questions: usize,
        answers: u16,
        bytes_sent: usize,
    },
    /// A bad datagram was rejected. `replied` tells whether an error
    /// response went out or the datagram was dropped silently.
    Rejected { error: DnsError, replied: bool },
}

/// Transport-agnostic server shell: one synchronous request/response cycle
/// over an injected datagram transport and record store.
///
/// The shell deliberately has no loop or lifecycle of its own — driving
/// repeated cycles (and any fan-out across datagrams) is an external
/// driver's job.
pub struct DnsServer<T: DatagramTransport> {
    transport: T,
    use_case: HandleDnsQueryUseCase,
}

impl<T: DatagramTransport> DnsServer<T> {
    pub fn new(transport: T, store: Arc<dyn RecordStore>) -> Self {
        Self {
            transport,
            use_case: HandleDnsQueryUseCase::new(store),
        }
    }

    /// Runs exactly one serve cycle, blocking only in the transport's
    /// receive and send.
    ///
    /// Decode failures are reported in the [`CycleOutcome`], never as
    /// `Err` — a bad datagram must not take a serving loop down. Only
    /// [`DnsError::TransportFailure`] aborts the cycle: on receive it is
    /// returned directly, on send it is reported to the caller.
    pub fn serve_once(&self) -> Result<CycleOutcome, DnsError> {
        let mut buf = vec![0u8; MAX_UDP_MESSAGE_LEN];
        let (peer, len) = self.transport.receive(&mut buf)?;
        buf.truncate(len);

        // Remember the transaction id before the buffer moves into decode,
        // so an error reply can still echo it.
        let id = if len >= HEADER_LEN {
            Some(u16::from_be_bytes([buf[0], buf[1]]))
        } else {
            None
        };

        let query = match DnsQuery::decode(buf) {
            Ok(query) => query,
            Err(error) => return self.reject(error, id, &peer),
        };

        let response = self.use_case.execute(&query);
        let bytes_sent = self.transport.send(&response.bytes, &peer)?;
        debug!(
            id = query.header().id,
            answers = response.answer_count,
            rcode = response.rcode,
            bytes_sent,
            "Response sent"
        );

        Ok(CycleOutcome::Answered {
            questions: query.questions().len(),
            answers: response.answer_count,
            bytes_sent,
        })
    }

    /// Datagram rejection policy, applied consistently:
    /// `MalformedMessage` answers FORMERR and `CompressionUnsupported`
    /// answers NOTIMP when the 12 header octets were received; a message
    /// with the QR bit set (or a sub-header runt) is dropped without a
    /// reply, since answering a response invites reflection loops.
    fn reject(
        &self,
        error: DnsError,
        id: Option<u16>,
        peer: &T::Peer,
    ) -> Result<CycleOutcome, DnsError> {
        let rcode = match &error {
            DnsError::MalformedMessage(_) => Some(header::RCODE_FORMERR),
            DnsError::CompressionUnsupported => Some(header::RCODE_NOTIMP),
            DnsError::NotAQuery | DnsError::TransportFailure(_) => None,
        };

        if let (Some(rcode), Some(id)) = (rcode, id) {
            let reply = MessageHeader {
                id,
                flags: header::FLAG_QR | rcode,
                qd_count: 0,
                an_count: 0,
                ns_count: 0,
                ar_count: 0,
            };
            let mut bytes = Vec::with_capacity(HEADER_LEN);
            reply.encode(&mut bytes);
            self.transport.send(&bytes, peer)?;
            warn!(error = %error, rcode, "Datagram rejected, error response sent");
            Ok(CycleOutcome::Rejected {
                error,
                replied: true,
            })
        } else {
            warn!(error = %error, "Datagram rejected, dropped");
            Ok(CycleOutcome::Rejected {
                error,
                replied: false,
            })
        }
    }
}
