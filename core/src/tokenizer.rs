use lazy_static::lazy_static;
use regex::Regex;

use crate::config::EmptyTerms;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"[\r\n]").expect("valid regex");
}

/// Tokenize document text: every CR/LF becomes a space, the result is trimmed
/// (whitespace and byte order marks), then split on the ASCII space character only.
///
/// Runs of spaces or tabs are not collapsed, so they surface as empty-string
/// terms. No case folding happens here.
pub fn tokenize(text: &str) -> Vec<String> {
    let flattened = LINE_BREAK.replace_all(text, " ");
    flattened
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// Split a ranking query on the literal space character.
///
/// Unlike [`tokenize`], line breaks are left inside the terms and nothing is trimmed.
pub fn split_query(query: &str) -> Vec<String> {
    query.split(' ').map(str::to_string).collect()
}

/// Apply the configured empty-term policy to an already split sequence.
pub fn apply_empty_terms(mut terms: Vec<String>, policy: EmptyTerms) -> Vec<String> {
    if policy == EmptyTerms::Drop {
        terms.retain(|t| !t.is_empty());
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("the cat\r\nsat");
        assert_eq!(t, vec!["the", "cat", "", "sat"]);
    }

    #[test]
    fn empty_text_yields_single_empty_term() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("   \n "), vec![""]);
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(tokenize("\u{feff}hello world\n"), vec!["hello", "world"]);
        assert_eq!(tokenize(" \u{feff} hello"), vec!["hello"]);
    }

    #[test]
    fn query_split_keeps_newlines() {
        assert_eq!(split_query("cat\nmat dog"), vec!["cat\nmat", "dog"]);
        assert_eq!(split_query(" cat"), vec!["", "cat"]);
    }

    #[test]
    fn drop_policy_removes_empty_terms() {
        let terms = tokenize("a  b\tc");
        assert_eq!(terms, vec!["a", "", "b\tc"]);
        assert_eq!(apply_empty_terms(terms, EmptyTerms::Drop), vec!["a", "b\tc"]);
    }
}
