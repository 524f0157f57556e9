pub mod cache;
pub mod codec;
pub mod resolver;
pub mod transport;

pub use cache::{CacheKey, CacheMetrics, RecordCache};
pub use resolver::ForwardingResolver;
