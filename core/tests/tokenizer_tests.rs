use vsm_core::tokenizer::{split_query, tokenize};

#[test]
fn it_flattens_line_breaks_and_trims() {
    let toks = tokenize("  Running\r\nRunners RUN!  ");
    // CR and LF each become a space, so the break leaves one empty term
    assert_eq!(toks, vec!["Running", "", "Runners", "RUN!"]);
}

#[test]
fn it_keeps_case_and_punctuation() {
    let toks = tokenize("The café's menu.");
    assert!(toks.contains(&"The".to_string()));
    assert!(toks.contains(&"café's".to_string()));
    assert!(toks.contains(&"menu.".to_string()));
}

#[test]
fn it_splits_on_space_only() {
    let toks = tokenize("a\tb  c");
    assert_eq!(toks, vec!["a\tb", "", "c"]);
}

#[test]
fn query_split_differs_from_document_tokenizing() {
    assert_eq!(tokenize("cat\nmat"), vec!["cat", "mat"]);
    assert_eq!(split_query("cat\nmat"), vec!["cat\nmat"]);
}
