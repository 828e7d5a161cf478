use std::sync::Arc;

use dashmap::DashMap;

use crate::analysis::fingerprint::Fingerprint;
use crate::analysis::models::AnalysisResult;

/// Process-lifetime store of successful analyses, keyed by fingerprint.
///
/// Unbounded and never evicted. Clones share the same map. Concurrent misses
/// on one key may both insert; the last write wins.
#[derive(Clone, Default)]
pub struct AnalysisCache {
    entries: Arc<DashMap<Fingerprint, AnalysisResult>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<AnalysisResult> {
        self.entries.get(fingerprint).map(|entry| entry.value().clone())
    }

    pub fn put(&self, fingerprint: Fingerprint, result: AnalysisResult) {
        self.entries.insert(fingerprint, result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
