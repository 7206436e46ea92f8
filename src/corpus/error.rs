use std::fmt;
use std::path::PathBuf;

/// Failure modes shared by the corpus loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// The backing file does not exist.
    ResourceNotFound(PathBuf),
    /// The backing file exists but could not be parsed.
    ParseError(String),
    /// The resource parsed but yielded no usable entries.
    EmptyResource(PathBuf),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceNotFound(path) => {
                write!(f, "resource not found: {}", path.display())
            }
            Self::ParseError(detail) => write!(f, "parse error: {}", detail),
            Self::EmptyResource(path) => {
                write!(f, "resource has no entries: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {}
