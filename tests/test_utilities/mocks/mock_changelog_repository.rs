use async_trait::async_trait;
use falcon_fix::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ChangelogRepository backed by an in-memory map keyed by (ga, version)
#[derive(Default, Clone)]
pub struct MockChangelogRepository {
    entries: HashMap<(String, String), ChangelogEntry>,
    calls: Arc<AtomicUsize>,
}

impl MockChangelogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, ga: &str, entry: ChangelogEntry) -> Self {
        self.entries
            .insert((ga.to_string(), entry.version.clone()), entry);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChangelogRepository for MockChangelogRepository {
    async fn fetch_changelog(&self, ga: &str, version: &str) -> Result<Option<ChangelogEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .entries
            .get(&(ga.to_string(), version.to_string()))
            .cloned())
    }
}
