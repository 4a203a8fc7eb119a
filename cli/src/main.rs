use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};
use vsm_core::{EmptyTerms, FsSource, IdfCaseMatching, Ranker, ScoringConfig, Source};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "vsm")]
#[command(about = "Rank documents against a query with TF-IDF cosine similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank files and inline texts against a query
    Rank {
        /// Query text, split on spaces
        #[arg(long)]
        query: String,
        /// Input path (file or directory), may be repeated
        #[arg(long)]
        input: Vec<String>,
        /// Inline document text, may be repeated
        #[arg(long)]
        text: Vec<String>,
        /// JSON scoring config file
        #[arg(long)]
        config: Option<String>,
        /// Lowercase document terms as well when counting document frequency
        #[arg(long, default_value_t = false)]
        fold_idf_case: bool,
        /// Drop empty terms produced by repeated spaces
        #[arg(long, default_value_t = false)]
        drop_empty_terms: bool,
        /// Print at most this many entries
        #[arg(long)]
        top: Option<usize>,
        /// Print the ranking as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct RankedOutput<'a> {
    rank: usize,
    index: usize,
    score: f64,
    source: &'a Source,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { query, input, text, config, fold_idf_case, drop_empty_terms, top, json } => {
            let mut cfg = match config {
                Some(path) => ScoringConfig::load(path)?,
                None => ScoringConfig::default(),
            };
            if fold_idf_case { cfg.idf_case = IdfCaseMatching::FoldBoth; }
            if drop_empty_terms { cfg.empty_terms = EmptyTerms::Drop; }
            rank(cfg, &query, &input, &text, top, json)
        }
    }
}

fn rank(cfg: ScoringConfig, query: &str, inputs: &[String], texts: &[String], top: Option<usize>, json: bool) -> Result<()> {
    let mut ranker = Ranker::with_config(cfg);
    ranker.add_corpus(texts);

    let mut files: Vec<String> = Vec::new();
    for input in inputs {
        files.extend(collect_files(Path::new(input)));
    }
    ranker.add_corpus_from_sources(&FsSource::new(), &files)?;
    tracing::info!(num_docs = ranker.corpus().len(), files = files.len(), "loaded corpus");

    let ranking = ranker.rank(query);
    let tracker = ranker.tracker();
    let shown = top.unwrap_or(ranking.len());
    let rows: Vec<RankedOutput> = ranking
        .iter()
        .take(shown)
        .enumerate()
        .map(|(rank, e)| RankedOutput { rank: rank + 1, index: e.index, score: e.score, source: &tracker[e.index].source })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}\t{:.6}\t{}\t{}", row.rank, row.score, row.index, row.source.as_str().replace('\n', " "));
        }
    }
    tracing::info!(shown = rows.len(), total = ranking.len(), "ranking complete");
    Ok(())
}

/// Regular files under `input` (or `input` itself), sorted so indices are reproducible.
fn collect_files(input: &Path) -> Vec<String> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
            if entry.path().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
    } else {
        // missing paths go through too, so the loader reports them
        files.push(input.to_path_buf());
    }
    files.into_iter().map(|p| p.to_string_lossy().into_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_directory_files_sorted() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.txt"), "b").unwrap();
        fs::write(dir.join("nested/a.txt"), "a").unwrap();
        let files = collect_files(dir);
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("b.txt"));
        assert!(files[1].ends_with("a.txt"));
    }

    #[test]
    fn cli_parses_rank_flags() {
        let cli = Cli::try_parse_from(["vsm", "rank", "--query", "cat mat", "--text", "a", "--text", "b", "--top", "1"]).unwrap();
        let Commands::Rank { query, text, top, json, .. } = cli.command;
        assert_eq!(query, "cat mat");
        assert_eq!(text, vec!["a", "b"]);
        assert_eq!(top, Some(1));
        assert!(!json);
    }
}
