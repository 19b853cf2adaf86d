use dashmap::DashMap;
use lynx_dns_application::ports::RecordStore;
use lynx_dns_domain::{ConfigError, LocalRecord, ResourceRecord};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::{debug, info};

/// Process-wide record cache: a multi-valued map from canonical name
/// (`"www.example.com."`) to resource records.
///
/// Reads come from the decode path, writes from the administrative
/// population path; DashMap keeps the two safe to overlap across threads.
/// Records under a name stay in insertion order. Nothing here expires:
/// TTL is carried to the wire, never enforced.
pub struct RecordCache {
    records: DashMap<Arc<str>, Vec<ResourceRecord>, FxBuildHasher>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self {
            records: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Installs the statically configured answers.
    pub fn populate(&self, records: &[LocalRecord]) -> Result<(), ConfigError> {
        for local in records {
            let name = local.canonical_name()?;
            let record = local.resource_record()?;
            debug!(
                name = %name,
                record_type = %record.record_type(),
                ttl = record.ttl,
                "Installing local record"
            );
            self.insert(&name, record);
        }
        info!(names = self.len(), "Record cache populated");
        Ok(())
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for RecordCache {
    fn lookup(&self, name: &str) -> Vec<ResourceRecord> {
        self.records
            .get(name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    fn insert(&self, name: &str, record: ResourceRecord) {
        self.records.entry(Arc::from(name)).or_default().push(record);
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
