use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS record type as the 16-bit wire code.
///
/// The forwarder caches whatever record types the upstream hands back, so the
/// representation has to be total: unknown codes are carried verbatim instead
/// of being mapped onto a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(pub u16);

impl RecordType {
    pub const A: RecordType = RecordType(1);
    pub const NS: RecordType = RecordType(2);
    pub const CNAME: RecordType = RecordType(5);
    pub const SOA: RecordType = RecordType(6);
    pub const PTR: RecordType = RecordType(12);
    pub const MX: RecordType = RecordType(15);
    pub const TXT: RecordType = RecordType(16);
    pub const AAAA: RecordType = RecordType(28);
    pub const SRV: RecordType = RecordType(33);
    pub const OPT: RecordType = RecordType(41);
    pub const HTTPS: RecordType = RecordType(65);

    pub fn as_str(&self) -> Option<&'static str> {
        match *self {
            Self::A => Some("A"),
            Self::NS => Some("NS"),
            Self::CNAME => Some("CNAME"),
            Self::SOA => Some("SOA"),
            Self::PTR => Some("PTR"),
            Self::MX => Some("MX"),
            Self::TXT => Some("TXT"),
            Self::AAAA => Some("AAAA"),
            Self::SRV => Some("SRV"),
            Self::OPT => Some("OPT"),
            Self::HTTPS => Some("HTTPS"),
            _ => None,
        }
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        RecordType(code)
    }
}

impl From<RecordType> for u16 {
    fn from(rt: RecordType) -> Self {
        rt.0
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.0),
        }
    }
}

/// One resource record as received from upstream.
///
/// The payload stays opaque: `wire` is the record's full uncompressed wire
/// encoding, and only the `(record_type, name, ttl)` triple is ever inspected
/// for cache bucketing and expiry. `name` is lowercased and fully qualified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub wire: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(name: String, record_type: RecordType, ttl: u32, wire: Vec<u8>) -> Self {
        Self {
            name,
            record_type,
            ttl,
            wire,
        }
    }
}
