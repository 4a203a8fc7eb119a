use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Something that can turn an identifier into raw document text.
///
/// Errors are handed back to the caller unchanged, so an I/O failure can still be
/// inspected with `err.downcast_ref::<std::io::Error>()`.
pub trait TextSource {
    fn read_text(&self, source_id: &str) -> Result<String>;
}

/// Reads UTF-8 files, optionally relative to a root directory.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    pub root: Option<PathBuf>,
}

impl FsSource {
    pub fn new() -> Self { Self::default() }

    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: Some(root.into()) }
    }

    fn resolve(&self, source_id: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(source_id),
            None => PathBuf::from(source_id),
        }
    }
}

impl TextSource for FsSource {
    fn read_text(&self, source_id: &str) -> Result<String> {
        let path = self.resolve(source_id);
        let text = fs::read_to_string(&path)?;
        tracing::trace!(path = %path.display(), bytes = text.len(), "read document");
        Ok(text)
    }
}

impl<F> TextSource for F
where
    F: Fn(&str) -> Result<String>,
{
    fn read_text(&self, source_id: &str) -> Result<String> {
        self(source_id)
    }
}
