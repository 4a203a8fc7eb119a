use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::ScoringConfig;
use crate::index::{DocId, SourceRecord};
use crate::ranker::Ranker;
use crate::source::TextSource;

/// A ranking result detached from the corpus borrow, so it can leave the read lock.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OwnedRankingEntry {
    pub index: DocId,
    pub score: f64,
    pub terms: Vec<String>,
}

/// Cloneable handle for hosts that share one ranker between threads.
///
/// Ingestion takes the write lock; ranking and tracker reads share the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedRanker {
    inner: Arc<RwLock<Ranker>>,
}

impl SharedRanker {
    pub fn new(ranker: Ranker) -> Self {
        Self { inner: Arc::new(RwLock::new(ranker)) }
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self::new(Ranker::with_config(config))
    }

    pub fn add_document(&self, text: &str) -> DocId {
        self.inner.write().add_document(text)
    }

    pub fn add_corpus<S: AsRef<str>>(&self, texts: &[S]) -> Vec<DocId> {
        self.inner.write().add_corpus(texts)
    }

    pub fn add_corpus_from_sources<L, S>(&self, loader: &L, source_ids: &[S]) -> Result<Vec<DocId>>
    where
        L: TextSource + ?Sized,
        S: AsRef<str>,
    {
        self.inner.write().add_corpus_from_sources(loader, source_ids)
    }

    pub fn rank(&self, query: &str) -> Vec<OwnedRankingEntry> {
        let guard = self.inner.read();
        guard
            .rank(query)
            .into_iter()
            .map(|e| OwnedRankingEntry { index: e.index, score: e.score, terms: e.document.terms().to_vec() })
            .collect()
    }

    pub fn tracker(&self) -> Vec<SourceRecord> {
        self.inner.read().tracker().to_vec()
    }

    pub fn len(&self) -> usize { self.inner.read().corpus().len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_readers_see_same_ranking() {
        let shared = SharedRanker::default();
        shared.add_corpus(&["rust borrow checker", "python garbage collector", "rust cargo"]);
        let expected = shared.rank("rust cargo");
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = shared.clone();
                thread::spawn(move || s.rank("rust cargo"))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
        assert_eq!(expected[0].index, 2);
    }

    #[test]
    fn writers_are_serialized() {
        let shared = SharedRanker::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let s = shared.clone();
                thread::spawn(move || s.add_document(&format!("doc {i}")))
            })
            .collect();
        let mut ids: Vec<DocId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
        assert_eq!(shared.tracker().len(), 8);
    }
}
