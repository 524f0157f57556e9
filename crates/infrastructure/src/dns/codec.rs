//! Wire codec built on `hickory-proto`.
//!
//! The only module that touches hickory types. Records cross the boundary in
//! their own wire encoding, so the cache and the resolver stay codec-agnostic:
//! each [`ResourceRecord`] carries a self-contained blob (any compression
//! pointers resolve within the blob itself) plus the `(type, name, ttl)`
//! triple the core actually reads.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder, BinEncodable, BinEncoder};
use hoard_dns_domain::{DomainError, RecordType, ResourceRecord};

/// A client query the resolver can answer.
///
/// Retains the parsed message so a cached reply can reuse the original id,
/// question and RD flag.
#[derive(Debug)]
pub struct DecodedQuery {
    message: Message,
    pub id: u16,
    pub qname: String,
    pub qtype: RecordType,
}

/// An upstream response split into its record sections.
#[derive(Debug)]
pub struct DecodedResponse {
    pub success: bool,
    pub rcode: &'static str,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DecodedResponse {
    /// All records across the three sections, in section order.
    pub fn all_records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additionals.iter())
    }
}

/// Parse raw query bytes; requires exactly one question.
pub fn decode_query(bytes: &[u8]) -> Result<DecodedQuery, DomainError> {
    let message = Message::from_vec(bytes)
        .map_err(|e| DomainError::Decode(format!("unparseable query: {e}")))?;

    let question = message
        .queries()
        .first()
        .ok_or_else(|| DomainError::Decode("query carries no question".to_string()))?;

    let qname = question.name().to_lowercase().to_utf8();
    let qtype = RecordType::from(u16::from(question.query_type()));

    Ok(DecodedQuery {
        id: message.id(),
        qname,
        qtype,
        message,
    })
}

/// Parse raw upstream response bytes into sectioned records.
pub fn decode_response(bytes: &[u8]) -> Result<DecodedResponse, DomainError> {
    let message = Message::from_vec(bytes)
        .map_err(|e| DomainError::Decode(format!("unparseable response: {e}")))?;

    let rcode = message.response_code();

    Ok(DecodedResponse {
        success: rcode == ResponseCode::NoError,
        rcode: rcode_to_status(rcode),
        answers: records_to_domain(message.answers())?,
        authority: records_to_domain(message.name_servers())?,
        additionals: records_to_domain(message.additionals())?,
    })
}

/// Synthesize a reply from cached records: the query's id, question and RD
/// flag come back unchanged, RA is set, rcode is NoError, and the cached
/// group becomes the answer section in its stored order.
pub fn encode_cached_reply(
    query: &DecodedQuery,
    records: &[ResourceRecord],
) -> Result<Vec<u8>, DomainError> {
    let mut response = Message::new(query.id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(query.message.recursion_desired());
    response.set_recursion_available(true);
    response.set_response_code(ResponseCode::NoError);

    if let Some(question) = query.message.queries().first() {
        response.add_query(question.clone());
    }

    for record in records {
        response.add_answer(record_from_wire(record)?);
    }

    serialize_message(&response)
}

fn records_to_domain(records: &[Record]) -> Result<Vec<ResourceRecord>, DomainError> {
    records.iter().map(record_to_domain).collect()
}

fn record_to_domain(record: &Record) -> Result<ResourceRecord, DomainError> {
    let mut wire = Vec::with_capacity(64);
    let mut encoder = BinEncoder::new(&mut wire);
    record
        .emit(&mut encoder)
        .map_err(|e| DomainError::Decode(format!("failed to re-encode record: {e}")))?;

    Ok(ResourceRecord::new(
        record.name().to_lowercase().to_utf8(),
        RecordType::from(u16::from(record.record_type())),
        record.ttl(),
        wire,
    ))
}

fn record_from_wire(record: &ResourceRecord) -> Result<Record, DomainError> {
    let mut decoder = BinDecoder::new(&record.wire);
    Record::read(&mut decoder)
        .map_err(|e| DomainError::Decode(format!("corrupt cached record: {e}")))
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::Decode(format!("failed to serialize reply: {e}")))?;
    Ok(buf)
}

fn rcode_to_status(rcode: ResponseCode) -> &'static str {
    match rcode {
        ResponseCode::NoError => "NOERROR",
        ResponseCode::NXDomain => "NXDOMAIN",
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::Refused => "REFUSED",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::FormErr => "FORMERR",
        _ => "UNKNOWN",
    }
}
