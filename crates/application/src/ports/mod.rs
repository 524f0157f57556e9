pub mod dns_transport;
pub mod resolver;
pub mod snapshot_store;

pub use dns_transport::{DnsTransport, TransportResponse};
pub use resolver::{QueryResolver, Resolution};
pub use snapshot_store::SnapshotStore;
