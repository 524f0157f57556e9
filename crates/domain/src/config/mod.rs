//! Configuration for Hoard DNS
//!
//! Organized by concern:
//! - `root`: main configuration and CLI overrides
//! - `server`: local listener binding
//! - `upstream`: the upstream resolver and query timeout
//! - `cache`: cache snapshot persistence
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
