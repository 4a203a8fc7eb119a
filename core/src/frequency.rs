//! Term frequency and inverse document frequency.

use crate::config::IdfCaseMatching;
use crate::index::Corpus;

/// Returned by [`inverse_document_frequency`] when there is no corpus data to measure against.
pub const IDF_UNAVAILABLE: f64 = -1.0;

/// `lowered` must already be `str::to_lowercase` output; both sides use the same
/// context-aware folding (final sigma).
fn eq_ignore_case(a: &str, lowered: &str) -> bool {
    a.to_lowercase() == lowered
}

/// Smoothed term frequency: case-insensitive occurrences of `term` over `doc.len() + 1`.
///
/// The extra one in the denominator keeps empty documents finite.
pub fn term_frequency<S: AsRef<str>>(term: &str, doc: &[S]) -> f64 {
    let lowered = term.to_lowercase();
    let occurrences = doc.iter().filter(|t| eq_ignore_case(t.as_ref(), &lowered)).count();
    occurrences as f64 / (doc.len() + 1) as f64
}

/// Smoothed inverse document frequency: `ln(N / (df + 1)) + 1`.
///
/// `df` counts documents holding at least one term equal to the lowercased `term`.
/// With [`IdfCaseMatching::QueryOnly`] document terms are compared as stored, so a
/// capitalized document term never matches. Returns [`IDF_UNAVAILABLE`] for an empty corpus.
pub fn inverse_document_frequency(term: &str, corpus: &Corpus) -> f64 {
    if corpus.is_empty() {
        return IDF_UNAVAILABLE;
    }
    let lowered = term.to_lowercase();
    let fold = corpus.config().idf_case == IdfCaseMatching::FoldBoth;
    let doc_freq = corpus
        .documents()
        .iter()
        .filter(|doc| {
            doc.terms().iter().any(|t| if fold { eq_ignore_case(t, &lowered) } else { *t == lowered })
        })
        .count();
    (corpus.len() as f64 / (doc_freq + 1) as f64).ln() + 1.0
}
