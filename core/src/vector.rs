use serde::Serialize;

use crate::frequency::{inverse_document_frequency, term_frequency};
use crate::index::Corpus;

/// TF, IDF and TF-IDF values for one query against one document.
/// Position `i` in each vector belongs to query term `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermVectors {
    pub tf: Vec<f64>,
    pub idf: Vec<f64>,
    pub tfidf: Vec<f64>,
}

/// IDF of every query term, in query order. `None` when the corpus is empty.
pub fn idf_vector<Q: AsRef<str>>(query: &[Q], corpus: &Corpus) -> Option<Vec<f64>> {
    if corpus.is_empty() {
        return None;
    }
    Some(query.iter().map(|term| inverse_document_frequency(term.as_ref(), corpus)).collect())
}

pub fn tf_vector<Q: AsRef<str>, D: AsRef<str>>(query: &[Q], doc: &[D]) -> Vec<f64> {
    query.iter().map(|term| term_frequency(term.as_ref(), doc)).collect()
}

pub fn term_vectors<Q, D>(query: &[Q], doc: &[D], corpus: &Corpus) -> Option<TermVectors>
where
    Q: AsRef<str>,
    D: AsRef<str>,
{
    let idf = idf_vector(query, corpus)?;
    let tf = tf_vector(query, doc);
    let tfidf = weigh(&tf, &idf);
    Some(TermVectors { tf, idf, tfidf })
}

/// Position-wise TF * IDF of `doc` over the query terms. `None` when the corpus is empty.
pub fn tfidf_vector<Q, D>(query: &[Q], doc: &[D], corpus: &Corpus) -> Option<Vec<f64>>
where
    Q: AsRef<str>,
    D: AsRef<str>,
{
    term_vectors(query, doc, corpus).map(|v| v.tfidf)
}

/// Both inputs are indexed by the same query, so they always have equal length.
pub(crate) fn weigh(tf: &[f64], idf: &[f64]) -> Vec<f64> {
    debug_assert_eq!(tf.len(), idf.len());
    tf.iter().zip(idf).map(|(t, i)| t * i).collect()
}
