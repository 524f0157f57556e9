use hoard_dns_domain::{CacheSnapshot, DomainError};

/// Durable storage for the cache snapshot.
///
/// One blob, overwritten wholesale on every save. A missing blob is an empty
/// cache, not an error; anything else unreadable surfaces as `SnapshotLoad`
/// and the caller decides how gracefully to degrade.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<CacheSnapshot, DomainError>;

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError>;
}
