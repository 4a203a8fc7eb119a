//! Cosine similarity between TF-IDF vectors.
//!
//! Every sum and the final ratio go through [`safe_sum`] / [`safe_divide`], so a NaN
//! from a degenerate input (empty document, zero-magnitude vector) ends up as 0.

use crate::index::Corpus;
use crate::vector::{idf_vector, tf_vector, weigh};

/// Sum that counts NaN terms as zero.
pub(crate) fn safe_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().filter(|v| !v.is_nan()).sum()
}

/// Division that returns 0 instead of NaN. Infinite results are passed through.
pub(crate) fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    let q = numerator / denominator;
    if q.is_nan() { 0.0 } else { q }
}

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    safe_sum(a.iter().zip(b).map(|(x, y)| x * y))
}

pub(crate) fn magnitude(v: &[f64]) -> f64 {
    safe_sum(v.iter().map(|x| x * x)).sqrt()
}

pub(crate) fn cosine(a: &[f64], b: &[f64]) -> f64 {
    safe_divide(dot(a, b), magnitude(a) * magnitude(b))
}

/// Cosine similarity of `doc` to `query`, where the query's own vector is the
/// TF-IDF of the query measured against itself.
///
/// Not exactly 1.0 for a document identical to the query, because of the smoothing
/// in TF. Returns 0 on an empty corpus.
pub fn cosine_similarity<Q, D>(query: &[Q], doc: &[D], corpus: &Corpus) -> f64
where
    Q: AsRef<str>,
    D: AsRef<str>,
{
    match QueryProfile::new(query, corpus) {
        Some(profile) => profile.score(doc),
        None => 0.0,
    }
}

/// Query-side vectors, computed once and reused against every document of a ranking.
pub(crate) struct QueryProfile<'q, Q> {
    query: &'q [Q],
    idf: Vec<f64>,
    vector: Vec<f64>,
}

impl<'q, Q: AsRef<str>> QueryProfile<'q, Q> {
    pub(crate) fn new(query: &'q [Q], corpus: &Corpus) -> Option<Self> {
        let idf = idf_vector(query, corpus)?;
        let vector = weigh(&tf_vector(query, query), &idf);
        Some(Self { query, idf, vector })
    }

    pub(crate) fn score<D: AsRef<str>>(&self, doc: &[D]) -> f64 {
        let doc_vector = weigh(&tf_vector(self.query, doc), &self.idf);
        cosine(&self.vector, &doc_vector)
    }
}
