use crate::dns_record::{RecordType, ResourceRecord};
use serde::{Deserialize, Serialize};

/// Serializable image of the whole record cache.
///
/// Written wholesale on every save and read back once at startup; entries keep
/// their absolute `expires_at` so a restart never refreshes a TTL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub entries: Vec<SnapshotEntry>,
}

/// One cached record group: the key pair, the group's records in answer-section
/// order, and the unix second past which the group is dead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub record_type: RecordType,
    pub expires_at: u64,
    pub records: Vec<ResourceRecord>,
}

impl CacheSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
