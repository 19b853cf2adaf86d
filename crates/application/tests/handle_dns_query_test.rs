mod helpers;

use helpers::{build_query, MockRecordStore};
use lynx_dns_application::ports::RecordStore;
use lynx_dns_application::use_cases::HandleDnsQueryUseCase;
use lynx_dns_domain::header::{FLAG_QR, FLAG_RD, FLAG_TC, RCODE_NOERROR, RCODE_NXDOMAIN};
use lynx_dns_domain::record::{CLASS_IN, QTYPE_ANY};
use lynx_dns_domain::wire::WireReader;
use lynx_dns_domain::{DnsQuery, MessageHeader, RecordData, ResourceRecord};
use std::net::Ipv4Addr;
use std::sync::Arc;

fn assemble(store: MockRecordStore, query_bytes: Vec<u8>) -> (lynx_dns_application::use_cases::AssembledResponse, Vec<u8>) {
    let use_case = HandleDnsQueryUseCase::new(Arc::new(store));
    let query = DnsQuery::decode(query_bytes.clone()).unwrap();
    (use_case.execute(&query), query_bytes)
}

fn reply_header(bytes: &[u8]) -> MessageHeader {
    MessageHeader::decode(&mut WireReader::new(bytes)).unwrap()
}

fn a_record(addr: [u8; 4], ttl: u32) -> ResourceRecord {
    ResourceRecord::new(RecordData::A(Ipv4Addr::from(addr)), ttl)
}

#[test]
fn test_single_match_answers_noerror() {
    let store = MockRecordStore::new();
    store.insert("www.example.com.", a_record([10, 0, 0, 1], 60));

    let query_bytes = build_query(0x1234, 0x0100, &[("www.example.com", 1, CLASS_IN)]);
    let (response, query_bytes) = assemble(store, query_bytes);

    assert_eq!(response.answer_count, 1);
    assert_eq!(response.rcode, RCODE_NOERROR);
    assert!(!response.truncated);

    let header = reply_header(&response.bytes);
    assert_eq!(header.id, 0x1234);
    assert!(header.is_response());
    assert!(header.recursion_desired());
    assert_eq!(header.opcode(), 0);
    assert_eq!(header.qd_count, 1);
    assert_eq!(header.an_count, 1);
    assert_eq!(header.rcode(), RCODE_NOERROR);

    // Question section echoed verbatim.
    let question_len = query_bytes.len() - 12;
    assert_eq!(
        &response.bytes[12..12 + question_len],
        &query_bytes[12..]
    );

    // Answer: owner name, type A, class IN, TTL, RDLENGTH 4, address.
    let answer = &response.bytes[12 + question_len..];
    let expected: Vec<u8> = [
        b"\x03www\x07example\x03com\x00".as_slice(),
        &[0x00, 0x01, 0x00, 0x01],
        &[0x00, 0x00, 0x00, 0x3C],
        &[0x00, 0x04],
        &[10, 0, 0, 1],
    ]
    .concat();
    assert_eq!(answer, expected);
}

#[test]
fn test_unknown_name_single_question_is_nxdomain() {
    let store = MockRecordStore::new();
    let query_bytes = build_query(0x0001, 0x0100, &[("missing.example.com", 1, CLASS_IN)]);
    let (response, _) = assemble(store, query_bytes);

    assert_eq!(response.answer_count, 0);
    assert_eq!(response.rcode, RCODE_NXDOMAIN);
    let header = reply_header(&response.bytes);
    assert_eq!(header.rcode(), RCODE_NXDOMAIN);
    assert_eq!(header.an_count, 0);
    // Header plus echoed question only.
    let query_len = build_query(0x0001, 0x0100, &[("missing.example.com", 1, CLASS_IN)]).len();
    assert_eq!(response.bytes.len(), query_len);
}

#[test]
fn test_qtype_mismatch_counts_as_no_match() {
    let store = MockRecordStore::new();
    store.insert("www.example.com.", a_record([10, 0, 0, 1], 60));

    // AAAA question against an A-only name.
    let query_bytes = build_query(0x0002, 0x0100, &[("www.example.com", 28, CLASS_IN)]);
    let (response, _) = assemble(store, query_bytes);
    assert_eq!(response.answer_count, 0);
    assert_eq!(response.rcode, RCODE_NXDOMAIN);
}

#[test]
fn test_any_qtype_returns_all_records_in_insertion_order() {
    let store = MockRecordStore::new();
    store.insert("dual.example.com.", a_record([10, 0, 0, 2], 60));
    store.insert(
        "dual.example.com.",
        ResourceRecord::new(RecordData::Aaaa("fd00::2".parse().unwrap()), 60),
    );

    let query_bytes = build_query(0x0003, 0x0000, &[("dual.example.com", QTYPE_ANY, CLASS_IN)]);
    let (response, query_bytes) = assemble(store, query_bytes);
    assert_eq!(response.answer_count, 2);
    assert_eq!(response.rcode, RCODE_NOERROR);

    // A first (inserted first), AAAA second: check the type tags in place.
    let question_len = query_bytes.len() - 12;
    let owner_len = "dual.example.com".len() + 2;
    let first_type_at = 12 + question_len + owner_len;
    assert_eq!(&response.bytes[first_type_at..first_type_at + 2], &[0x00, 0x01]);
    let second_type_at = first_type_at + 2 + 2 + 4 + 2 + 4 + owner_len;
    assert_eq!(&response.bytes[second_type_at..second_type_at + 2], &[0x00, 0x1C]);
}

#[test]
fn test_cname_answer_carries_target_name() {
    let store = MockRecordStore::new();
    store.insert(
        "alias.example.com.",
        ResourceRecord::new(RecordData::Cname("www.example.com".parse().unwrap()), 300),
    );

    let query_bytes = build_query(0x0004, 0x0100, &[("alias.example.com", 5, CLASS_IN)]);
    let (response, _) = assemble(store, query_bytes);
    assert_eq!(response.answer_count, 1);
    assert!(response.bytes.ends_with(b"\x03www\x07example\x03com\x00"));
}

#[test]
fn test_multi_question_mixed_results_is_noerror() {
    let store = MockRecordStore::new();
    store.insert("known.test.", a_record([10, 0, 0, 3], 60));

    let query_bytes = build_query(
        0x0005,
        0x0100,
        &[("known.test", 1, CLASS_IN), ("unknown.test", 1, CLASS_IN)],
    );
    let (response, _) = assemble(store, query_bytes);
    assert_eq!(response.answer_count, 1);
    assert_eq!(response.rcode, RCODE_NOERROR);
    let header = reply_header(&response.bytes);
    assert_eq!(header.qd_count, 2);
    assert_eq!(header.an_count, 1);
}

#[test]
fn test_multi_question_zero_matches_is_still_noerror() {
    // NXDOMAIN is reserved for the single-question case.
    let store = MockRecordStore::new();
    let query_bytes = build_query(
        0x0006,
        0x0100,
        &[("a.test", 1, CLASS_IN), ("b.test", 1, CLASS_IN)],
    );
    let (response, _) = assemble(store, query_bytes);
    assert_eq!(response.answer_count, 0);
    assert_eq!(response.rcode, RCODE_NOERROR);
}

#[test]
fn test_uppercase_query_matches_but_echo_keeps_original_bytes() {
    let store = MockRecordStore::new();
    store.insert("www.example.com.", a_record([10, 0, 0, 4], 60));

    // Hand-built question with uppercase label bytes.
    let mut query_bytes = build_query(0x0007, 0x0100, &[]);
    query_bytes[5] = 1; // qd_count
    query_bytes.extend_from_slice(b"\x03WWW\x07EXAMPLE\x03COM\x00\x00\x01\x00\x01");

    let use_case = HandleDnsQueryUseCase::new(Arc::new(store));
    let query = DnsQuery::decode(query_bytes.clone()).unwrap();
    let response = use_case.execute(&query);

    assert_eq!(response.answer_count, 1);
    // The echoed question keeps the sender's casing.
    let question_len = query_bytes.len() - 12;
    assert_eq!(&response.bytes[12..12 + question_len], &query_bytes[12..]);
    assert_eq!(&response.bytes[13..16], b"WWW");
}

#[test]
fn test_overflowing_answers_withheld_and_tc_set() {
    let store = MockRecordStore::new();
    for i in 0..30u8 {
        store.insert("a.test.", a_record([10, 0, 0, i], 60));
    }

    let query_bytes = build_query(0x0008, 0x0100, &[("a.test", 1, CLASS_IN)]);
    let (response, _) = assemble(store, query_bytes);

    // prefix 24 octets, 22 per answer: 22 fit under 512, 8 are withheld.
    assert_eq!(response.answer_count, 22);
    assert!(response.truncated);
    assert_eq!(response.bytes.len(), 24 + 22 * 22);
    assert!(response.bytes.len() <= 512);

    let header = reply_header(&response.bytes);
    assert!(header.truncated());
    assert_eq!(header.an_count, 22);
    assert_eq!(header.rcode(), RCODE_NOERROR);
    assert_eq!(header.flags & (FLAG_QR | FLAG_RD | FLAG_TC), FLAG_QR | FLAG_RD | FLAG_TC);
}
