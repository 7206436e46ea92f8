use std::fs::File;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::error::CorpusError;

/// Ordered, immutable list of natural-language quotes.
///
/// Used only as a statistical sample source for letter-frequency hints,
/// never as gameplay content.
#[derive(Debug, Clone)]
pub struct QuoteCorpus {
    quotes: Vec<String>,
}

impl QuoteCorpus {
    /// Wrap an already-loaded quote list.
    pub fn new(quotes: Vec<String>) -> Self {
        Self { quotes }
    }

    /// Load quotes from a CSV file: header row skipped, quote text taken
    /// from the first column, empty cells ignored.
    ///
    /// Fails with [`CorpusError::ResourceNotFound`] if the file is missing,
    /// [`CorpusError::ParseError`] if the CSV reader chokes, and
    /// [`CorpusError::EmptyResource`] if no quotes are found.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::ResourceNotFound(path.to_path_buf()).into());
        }

        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut quotes = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| CorpusError::ParseError(e.to_string()))?;
            if let Some(cell) = record.get(0) {
                let cell = cell.trim();
                if !cell.is_empty() {
                    quotes.push(cell.to_string());
                }
            }
        }

        if quotes.is_empty() {
            return Err(CorpusError::EmptyResource(path.to_path_buf()).into());
        }

        info!("quote corpus loaded: {} quotes from {}", quotes.len(), path.display());
        Ok(Self { quotes })
    }

    pub fn entries(&self) -> &[String] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
