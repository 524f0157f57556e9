//! Hoard DNS Application Layer
//!
//! Ports the resolution core is wired through. Infrastructure provides the
//! adapters; the CLI does the wiring.
pub mod ports;

pub use ports::{DnsTransport, QueryResolver, Resolution, SnapshotStore, TransportResponse};
