use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed DNS message: {0}")]
    Decode(String),

    #[error("Upstream query to {server} timed out after {timeout_secs}s")]
    TransportTimeout { server: String, timeout_secs: u64 },

    #[error("Transport failure talking to {server}: {detail}")]
    TransportIo { server: String, detail: String },

    #[error("Cache snapshot unreadable: {0}")]
    SnapshotLoad(String),

    #[error("Cache snapshot unwritable: {0}")]
    SnapshotSave(String),
}

impl DomainError {
    /// Failures on the upstream exchange, as opposed to malformed bytes.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::TransportIo { .. }
        )
    }
}
