use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;

use crate::config::{EmptyTerms, ScoringConfig};
use crate::index::{Corpus, DocId, Document, SourceRecord};
use crate::similarity::QueryProfile;
use crate::source::TextSource;
use crate::tokenizer::split_query;

#[derive(Debug, Clone, Serialize)]
pub struct RankingEntry<'a> {
    pub document: &'a Document,
    pub score: f64,
    pub index: DocId,
}

/// Rank every document of `corpus` against a raw query string.
///
/// The query is split on literal spaces only; line breaks inside it are kept as part of the terms.
pub fn rank_by_query<'a>(corpus: &'a Corpus, query: &str) -> Vec<RankingEntry<'a>> {
    rank_by_terms(corpus, &split_query(query))
}

/// Rank every document of `corpus` against an already tokenized query.
/// The corpus's empty-term policy applies to the query as well.
/// The result holds one entry per document, sorted by descending score.
pub fn rank_by_terms<'a, Q: AsRef<str>>(corpus: &'a Corpus, query: &[Q]) -> Vec<RankingEntry<'a>> {
    let query: Vec<&str> = match corpus.config().empty_terms {
        EmptyTerms::Keep => query.iter().map(AsRef::<str>::as_ref).collect(),
        EmptyTerms::Drop => query.iter().map(AsRef::<str>::as_ref).filter(|t| !t.is_empty()).collect(),
    };
    let Some(profile) = QueryProfile::new(&query, corpus) else {
        return Vec::new();
    };
    let mut ranking: Vec<RankingEntry<'a>> = corpus
        .documents()
        .iter()
        .enumerate()
        .map(|(index, document)| {
            let score = profile.score(document.terms());
            tracing::trace!(index, score, "scored document");
            RankingEntry { document, score, index }
        })
        .collect();
    ranking.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    tracing::debug!(documents = ranking.len(), query_terms = query.len(), "ranked corpus");
    ranking
}

/// Owns one corpus and answers ranking queries against it.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    corpus: Corpus,
}

impl Ranker {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { corpus: Corpus::with_config(config) }
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn add_document(&mut self, text: &str) -> DocId {
        self.corpus.add_document(text)
    }

    pub fn add_document_from_source<L: TextSource + ?Sized>(&mut self, loader: &L, source_id: &str) -> Result<DocId> {
        self.corpus.add_document_from_source(loader, source_id)
    }

    pub fn add_corpus<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<DocId> {
        self.corpus.add_corpus(texts)
    }

    pub fn add_corpus_from_sources<L, S>(&mut self, loader: &L, source_ids: &[S]) -> Result<Vec<DocId>>
    where
        L: TextSource + ?Sized,
        S: AsRef<str>,
    {
        self.corpus.add_corpus_from_sources(loader, source_ids)
    }

    pub fn rank(&self, query: &str) -> Vec<RankingEntry<'_>> {
        rank_by_query(&self.corpus, query)
    }

    pub fn rank_terms<Q: AsRef<str>>(&self, query: &[Q]) -> Vec<RankingEntry<'_>> {
        rank_by_terms(&self.corpus, query)
    }

    pub fn tracker(&self) -> &[SourceRecord] { self.corpus.tracker() }
}
