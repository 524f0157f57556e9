pub mod file_store;

pub use file_store::FileSnapshotStore;
pub use hoard_dns_application::ports::SnapshotStore;
