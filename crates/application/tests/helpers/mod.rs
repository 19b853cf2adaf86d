use lynx_dns_application::ports::{DatagramTransport, RecordStore};
use lynx_dns_domain::{DnsError, Question, ResourceRecord};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// In-memory record store mock preserving per-name insertion order.
#[derive(Default)]
pub struct MockRecordStore {
    records: Mutex<HashMap<String, Vec<ResourceRecord>>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MockRecordStore {
    fn lookup(&self, name: &str) -> Vec<ResourceRecord> {
        self.records
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    fn insert(&self, name: &str, record: ResourceRecord) {
        self.records
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default()
            .push(record);
    }

    fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

/// Scripted transport: hands out queued datagrams and captures everything
/// sent. Receiving with nothing queued reports a transport failure.
#[derive(Default)]
pub struct MockTransport {
    incoming: Mutex<VecDeque<Vec<u8>>>,
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self, datagram: &[u8]) {
        self.incoming.lock().unwrap().push_back(datagram.to_vec());
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

impl DatagramTransport for MockTransport {
    type Peer = ();

    fn receive(&self, buf: &mut [u8]) -> Result<((), usize), DnsError> {
        let datagram = self
            .incoming
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DnsError::TransportFailure("no datagram queued".to_string()))?;
        let len = datagram.len().min(buf.len());
        buf[..len].copy_from_slice(&datagram[..len]);
        Ok(((), len))
    }

    fn send(&self, buf: &[u8], _peer: &()) -> Result<usize, DnsError> {
        self.sent.lock().unwrap().push(buf.to_vec());
        Ok(buf.len())
    }
}

/// Serializes a query datagram: header plus one question per entry.
pub fn build_query(id: u16, flags: u16, questions: &[(&str, u16, u16)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&id.to_be_bytes());
    bytes.extend_from_slice(&flags.to_be_bytes());
    bytes.extend_from_slice(&(questions.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    for (name, qtype, qclass) in questions {
        let question = Question {
            qname: name.parse().unwrap(),
            qtype: *qtype,
            qclass: *qclass,
        };
        question.encode(&mut bytes);
    }
    bytes
}
