use hoard_dns_domain::RecordType;
use std::fmt;

/// Cache key: case-normalized query name plus record type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub name: String,
    pub record_type: RecordType,
}

impl CacheKey {
    /// Lowercases the name so keys compare equal however the upstream (or the
    /// client) cased them.
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: name.to_lowercase(),
            record_type,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record_type, self.name)
    }
}
