use super::{CacheEntry, CacheKey, CacheMetrics};
use hoard_dns_domain::{CacheSnapshot, ResourceRecord, SnapshotEntry};
use rustc_hash::FxHashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Wall clock in unix seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// TTL-bounded record cache.
///
/// Maps `(record type, name)` to a record group and its expiry. Reads evict
/// lazily: an expired entry is removed the first time it is looked up, and
/// that is the only reclamation there is. There is no capacity bound either,
/// so an upstream flooding responses for distinct names grows this without
/// limit.
///
/// Owned exclusively by the resolver on the single server task; every method
/// takes `&mut self` and nothing is locked.
#[derive(Debug, Default)]
pub struct RecordCache {
    entries: FxHashMap<CacheKey, CacheEntry>,
    metrics: CacheMetrics,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the map from a persisted snapshot.
    ///
    /// Entries that expired while the server was down are kept; the lazy
    /// eviction path reclaims them on their next lookup.
    pub fn from_snapshot(snapshot: CacheSnapshot) -> Self {
        let mut entries =
            FxHashMap::with_capacity_and_hasher(snapshot.entries.len(), Default::default());
        for entry in snapshot.entries {
            entries.insert(
                CacheKey::new(&entry.name, entry.record_type),
                CacheEntry {
                    records: entry.records,
                    expires_at: entry.expires_at,
                },
            );
        }
        Self {
            entries,
            metrics: CacheMetrics::default(),
        }
    }

    /// Full image of the map, sorted by key for a stable on-disk blob.
    pub fn to_snapshot(&self) -> CacheSnapshot {
        let mut entries: Vec<SnapshotEntry> = self
            .entries
            .iter()
            .map(|(key, entry)| SnapshotEntry {
                name: key.name.clone(),
                record_type: key.record_type,
                expires_at: entry.expires_at,
                records: entry.records.clone(),
            })
            .collect();
        entries.sort_by(|a, b| {
            (a.name.as_str(), u16::from(a.record_type))
                .cmp(&(b.name.as_str(), u16::from(b.record_type)))
        });
        CacheSnapshot { entries }
    }

    /// Overwrites any entry for `key`; last write wins, no merging.
    pub fn put_at(&mut self, key: CacheKey, records: Vec<ResourceRecord>, ttl: u32, now: u64) {
        debug!(key = %key, ttl, records = records.len(), "Caching record group");
        self.entries.insert(key, CacheEntry::new(records, ttl, now));
        self.metrics.insertions += 1;
    }

    pub fn put(&mut self, key: CacheKey, records: Vec<ResourceRecord>, ttl: u32) {
        self.put_at(key, records, ttl, unix_now());
    }

    /// Fresh hit returns the group in insertion order; an expired entry is
    /// removed and reported as a miss.
    pub fn get_at(&mut self, key: &CacheKey, now: u64) -> Option<&[ResourceRecord]> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.metrics.misses += 1;
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.metrics.misses += 1;
            self.metrics.expired_evictions += 1;
            debug!(key = %key, "Evicted expired cache entry");
            return None;
        }

        self.metrics.hits += 1;
        self.entries.get(key).map(|entry| entry.records.as_slice())
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<&[ResourceRecord]> {
        self.get_at(key, unix_now())
    }

    pub fn contains_key(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> CacheMetrics {
        self.metrics
    }
}
