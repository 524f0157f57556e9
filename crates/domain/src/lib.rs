//! Hoard DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod snapshot;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordType, ResourceRecord};
pub use errors::DomainError;
pub use snapshot::{CacheSnapshot, SnapshotEntry};
