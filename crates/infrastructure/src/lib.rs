//! Hoard DNS Infrastructure Layer
//!
//! Adapters around the resolution core: the hickory-proto wire codec, the
//! record cache, the UDP upstream transport, the forwarding resolver and the
//! file-backed snapshot store.
pub mod dns;
pub mod persistence;
