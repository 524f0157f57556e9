use async_trait::async_trait;

/// Outcome of resolving one raw query.
///
/// "No response" is a first-class value, not an error: malformed queries,
/// upstream failures and error rcodes all end here, and the server loop drops
/// the client's datagram silently in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A reply the server loop should send back to the client.
    Answered { bytes: Vec<u8>, cache_hit: bool },
    /// Drop the query; nothing goes back on the wire.
    NoResponse,
}

impl Resolution {
    pub fn is_answered(&self) -> bool {
        matches!(self, Resolution::Answered { .. })
    }
}

/// The resolution core seen from the server loop.
#[async_trait]
pub trait QueryResolver: Send {
    /// Fully resolve one query: cache lookup, or forward-and-populate.
    async fn resolve(&mut self, raw_query: &[u8]) -> Resolution;
}
