use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How document terms are compared against a query term when counting document frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdfCaseMatching {
    /// Lowercase the query term only; document terms are compared as stored.
    #[default]
    QueryOnly,
    /// Lowercase both sides before comparing.
    FoldBoth,
}

/// What to do with empty-string terms produced by consecutive spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTerms {
    #[default]
    Keep,
    Drop,
}

/// Scoring knobs fixed for the lifetime of a corpus.
/// The default reproduces the classic numerics exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub idf_case: IdfCaseMatching,
    pub empty_terms: EmptyTerms,
}

impl ScoringConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut f = File::open(path)?;
        let mut buf = String::new();
        f.read_to_string(&mut buf)?;
        let cfg: ScoringConfig = serde_json::from_str(&buf)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: ScoringConfig = serde_json::from_str(r#"{"idf_case":"fold_both"}"#).unwrap();
        assert_eq!(cfg.idf_case, IdfCaseMatching::FoldBoth);
        assert_eq!(cfg.empty_terms, EmptyTerms::Keep);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.json");
        std::fs::write(&path, r#"{"empty_terms":"drop"}"#).unwrap();
        let cfg = ScoringConfig::load(&path).unwrap();
        assert_eq!(cfg, ScoringConfig { idf_case: IdfCaseMatching::QueryOnly, empty_terms: EmptyTerms::Drop });
    }
}
