use hoard_dns_domain::ResourceRecord;

/// One cached record group with its fixed expiry.
///
/// `expires_at` is stamped once at insertion as `now + ttl` and never
/// recomputed on read.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub records: Vec<ResourceRecord>,
    pub expires_at: u64,
}

impl CacheEntry {
    pub fn new(records: Vec<ResourceRecord>, ttl: u32, now: u64) -> Self {
        Self {
            records,
            expires_at: now.saturating_add(u64::from(ttl)),
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}
