use hoard_dns_application::ports::SnapshotStore;
use hoard_dns_infrastructure::dns::RecordCache;
use hoard_dns_infrastructure::persistence::FileSnapshotStore;
use tracing::warn;

/// An unreadable snapshot degrades to an empty cache; the server always
/// starts.
pub fn load_cache(store: &FileSnapshotStore) -> RecordCache {
    match store.load() {
        Ok(snapshot) => RecordCache::from_snapshot(snapshot),
        Err(e) => {
            warn!(error = %e, "Cache snapshot unreadable; starting with an empty cache");
            RecordCache::new()
        }
    }
}
