pub mod entry;
pub mod key;
pub mod metrics;
pub mod store;

pub use entry::CacheEntry;
pub use key::CacheKey;
pub use metrics::CacheMetrics;
pub use store::RecordCache;
