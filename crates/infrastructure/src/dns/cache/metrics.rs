/// Cache counters.
///
/// Plain integers: the cache lives on the single server task, so there is
/// nothing to synchronize.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expired_evictions: u64,
}
