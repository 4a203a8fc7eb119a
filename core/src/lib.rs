//! Vector space model ranking: TF-IDF weighting and cosine similarity over an
//! in-memory, append-only corpus of whitespace-tokenized documents.

pub mod config;
pub mod frequency;
pub mod index;
pub mod ranker;
pub mod shared;
pub mod similarity;
pub mod source;
pub mod tokenizer;
pub mod vector;

pub use config::{EmptyTerms, IdfCaseMatching, ScoringConfig};
pub use frequency::{inverse_document_frequency, term_frequency, IDF_UNAVAILABLE};
pub use index::{Corpus, DocId, Document, Source, SourceRecord};
pub use ranker::{rank_by_query, rank_by_terms, Ranker, RankingEntry};
pub use shared::{OwnedRankingEntry, SharedRanker};
pub use similarity::cosine_similarity;
pub use source::{FsSource, TextSource};
pub use vector::{idf_vector, term_vectors, tfidf_vector, TermVectors};
