use std::collections::BTreeSet;

use crate::domain::types::SourceRecord;

/// The mock's fixed source list plus the set of ids still considered known.
///
/// `remove_source` only forgets the id; the record list handed out by
/// `available_sources` is never shortened.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<SourceRecord>,
    source_ids: BTreeSet<String>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<SourceRecord>) -> Self {
        let source_ids = sources.iter().map(|s| s.source_id.clone()).collect();
        Self {
            sources,
            source_ids,
        }
    }

    /// The four records a freshly started daemon reports.
    pub fn seeded() -> Self {
        Self::new(vec![
            SourceRecord::new("source-1", "google", 1, true),
            SourceRecord::new("source-2", "google", 2, false),
            SourceRecord::new("source-3", "yahoo", 3, false),
            SourceRecord::new("source-4", "ubuntu", 4, false),
        ])
    }

    pub fn available_sources(&self) -> &[SourceRecord] {
        &self.sources
    }

    /// Returns `true` if the id was known and has now been forgotten.
    pub fn remove_source(&mut self, source_id: &str) -> bool {
        self.source_ids.remove(source_id)
    }

    pub fn contains(&self, source_id: &str) -> bool {
        self.source_ids.contains(source_id)
    }

    /// Known ids in sorted order.
    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.source_ids.iter().map(String::as_str)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
