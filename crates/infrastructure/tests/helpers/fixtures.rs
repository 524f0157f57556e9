//! Wire-format fixtures built with hickory-proto.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A recursive query for `name`/`rtype` in wire format.
pub fn wire_query(id: u16, name: &str, rtype: RecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).expect("fixture name"));
    query.set_query_type(rtype);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    serialize(&message)
}

/// A response to `query_bytes` with the given rcode and sections.
pub fn wire_response(
    query_bytes: &[u8],
    rcode: ResponseCode,
    answers: Vec<Record>,
    authority: Vec<Record>,
    additionals: Vec<Record>,
) -> Vec<u8> {
    let query = Message::from_vec(query_bytes).expect("fixture query");

    let mut message = Message::new(query.id(), MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message.set_response_code(rcode);
    if let Some(question) = query.queries().first() {
        message.add_query(question.clone());
    }
    for record in answers {
        message.add_answer(record);
    }
    for record in authority {
        message.add_name_server(record);
    }
    for record in additionals {
        message.add_additional(record);
    }

    serialize(&message)
}

pub fn a_record(name: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_str(name).expect("fixture name"),
        ttl,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}

pub fn ns_record(name: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(name).expect("fixture name"),
        ttl,
        RData::NS(NS(Name::from_str(target).expect("fixture target"))),
    )
}

fn serialize(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).expect("fixture serialization");
    buf
}
