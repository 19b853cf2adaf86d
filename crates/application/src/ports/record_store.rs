use lynx_dns_domain::ResourceRecord;

/// Port for the shared record cache: a multi-valued mapping from canonical
/// domain-name string to resource records.
///
/// Lookup equality is exact canonical-string match, no wildcard or suffix
/// matching; records under one name keep insertion order. The decode path
/// only reads — `insert` is the administrative population path, and
/// concurrency safety between the two is the implementer's contract.
pub trait RecordStore: Send + Sync {
    /// Records under `name` in insertion order; empty when the name is
    /// unknown.
    fn lookup(&self, name: &str) -> Vec<ResourceRecord>;

    /// Appends a record under `name`.
    fn insert(&self, name: &str, record: ResourceRecord);

    /// Number of distinct names with at least one record.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
