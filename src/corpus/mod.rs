// Corpus loading — read-only word and quote data consumed by the engine.

pub mod error;
pub mod quotes;
pub mod words;

pub use error::CorpusError;
pub use quotes::QuoteCorpus;
pub use words::WordCorpus;
