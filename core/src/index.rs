use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::source::TextSource;
use crate::tokenizer::{apply_empty_terms, tokenize};

pub type DocId = usize;

/// A tokenized document. Immutable once it is part of a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    terms: Vec<String>,
}

impl Document {
    pub fn new(terms: Vec<String>) -> Self { Self { terms } }
    pub fn terms(&self) -> &[String] { &self.terms }
    pub fn len(&self) -> usize { self.terms.len() }
    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

/// Where a document came from, kept for presenting results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Source {
    /// The raw text that was tokenized.
    Text(String),
    /// An opaque identifier handed to a [`TextSource`], usually a path.
    Path(String),
}

impl Source {
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Text(_) => "text",
            Source::Path(_) => "path",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Source::Text(s) | Source::Path(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub index: DocId,
    pub source: Source,
}

/// Append-only collection of tokenized documents.
///
/// The index handed out on insertion is the document's position and never changes.
/// `tracker` always has one record per document, aligned by index.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
    tracker: Vec<SourceRecord>,
    config: ScoringConfig,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &ScoringConfig { &self.config }
    pub fn len(&self) -> usize { self.docs.len() }
    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
    pub fn documents(&self) -> &[Document] { &self.docs }
    pub fn document(&self, index: DocId) -> Option<&Document> { self.docs.get(index) }

    /// Source records for every document, in index order.
    pub fn tracker(&self) -> &[SourceRecord] { &self.tracker }

    /// Tokenize `text` and append it; the record keeps the text itself.
    pub fn add_document(&mut self, text: &str) -> DocId {
        self.push(text, Source::Text(text.to_string()))
    }

    /// Append text that was already read from somewhere else; the record keeps `source_id`.
    pub fn add_loaded_document(&mut self, text: &str, source_id: &str) -> DocId {
        self.push(text, Source::Path(source_id.to_string()))
    }

    /// Read `source_id` through `loader` and append it.
    /// A read failure is returned as is and leaves the corpus untouched.
    pub fn add_document_from_source<L: TextSource + ?Sized>(&mut self, loader: &L, source_id: &str) -> Result<DocId> {
        let text = loader.read_text(source_id).map_err(|err| {
            tracing::warn!(source_id, error = %err, "failed to read document source");
            err
        })?;
        Ok(self.add_loaded_document(&text, source_id))
    }

    pub fn add_corpus<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<DocId> {
        let ids: Vec<DocId> = texts.iter().map(|t| self.add_document(t.as_ref())).collect();
        tracing::debug!(added = ids.len(), total = self.len(), "added text batch");
        ids
    }

    /// Fail-fast batch load. Documents appended before a failing item stay in the corpus.
    pub fn add_corpus_from_sources<L, S>(&mut self, loader: &L, source_ids: &[S]) -> Result<Vec<DocId>>
    where
        L: TextSource + ?Sized,
        S: AsRef<str>,
    {
        let mut ids = Vec::with_capacity(source_ids.len());
        for id in source_ids {
            ids.push(self.add_document_from_source(loader, id.as_ref())?);
        }
        tracing::debug!(added = ids.len(), total = self.len(), "added source batch");
        Ok(ids)
    }

    fn push(&mut self, text: &str, source: Source) -> DocId {
        let terms = apply_empty_terms(tokenize(text), self.config.empty_terms);
        let index = self.docs.len();
        tracing::debug!(index, terms = terms.len(), kind = source.kind(), "ingested document");
        self.docs.push(Document::new(terms));
        self.tracker.push(SourceRecord { index, source });
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmptyTerms;

    #[test]
    fn indices_follow_insertion_order() {
        let mut corpus = Corpus::new();
        assert_eq!(corpus.add_document("a b"), 0);
        assert_eq!(corpus.add_corpus(&["c", "d e f"]), vec![1, 2]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.document(2).unwrap().terms(), &["d", "e", "f"]);
        let idx: Vec<DocId> = corpus.tracker().iter().map(|r| r.index).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn tracker_keeps_raw_text_and_paths() {
        let mut corpus = Corpus::new();
        corpus.add_document("line one\nline two");
        corpus.add_loaded_document("body", "docs/a.txt");
        assert_eq!(corpus.tracker()[0].source, Source::Text("line one\nline two".into()));
        assert_eq!(corpus.tracker()[1].source, Source::Path("docs/a.txt".into()));
        assert_eq!(corpus.document(1).unwrap().terms(), &["body"]);
    }

    #[test]
    fn drop_config_filters_empty_terms() {
        let mut corpus = Corpus::with_config(ScoringConfig { empty_terms: EmptyTerms::Drop, ..Default::default() });
        corpus.add_document("a   b");
        assert_eq!(corpus.document(0).unwrap().len(), 2);
    }

    #[test]
    fn source_serializes_tagged() {
        let rec = SourceRecord { index: 3, source: Source::Path("x.txt".into()) };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json, serde_json::json!({"index": 3, "source": {"kind": "path", "value": "x.txt"}}));
    }
}
