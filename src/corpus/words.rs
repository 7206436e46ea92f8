use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::error::CorpusError;

/// Ordered, immutable list of candidate plaintext entries.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    entries: Vec<String>,
}

impl WordCorpus {
    /// Wrap an already-loaded entry list.
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Load a word list from a UTF-8 text file, one entry per line.
    ///
    /// Entries are trimmed and blank lines skipped. Fails with
    /// [`CorpusError::ResourceNotFound`] if the file is missing and
    /// [`CorpusError::EmptyResource`] if nothing usable remains.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::ResourceNotFound(path.to_path_buf()).into());
        }

        let text = fs::read_to_string(path)?;
        let entries: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if entries.is_empty() {
            return Err(CorpusError::EmptyResource(path.to_path_buf()).into());
        }

        info!("word corpus loaded: {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
