use super::frequency::FrequencyTable;
use super::substitution::SubstitutionMap;

/// One cipher token per plaintext character position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherToken {
    /// A substituted letter with the frequency hint of the original letter.
    Letter { glyph: char, hint: u8 },
    /// A literal apostrophe, kept visible to the solver.
    Apostrophe,
    /// A word boundary, rendered as an empty cell.
    Space,
    /// Any other character, passed through unchanged.
    Other(char),
}

impl CipherToken {
    /// Wire form of the token: the substituted letter, `'`, an empty
    /// string for spaces, or the passthrough character.
    pub fn rendered(&self) -> String {
        match self {
            Self::Letter { glyph, .. } => glyph.to_string(),
            Self::Apostrophe => "'".to_string(),
            Self::Space => String::new(),
            Self::Other(ch) => ch.to_string(),
        }
    }

    /// Frequency hint, present only for letter tokens.
    pub fn hint(&self) -> Option<u8> {
        match self {
            Self::Letter { hint, .. } => Some(*hint),
            _ => None,
        }
    }
}

/// Tokenize an uppercased plaintext character by character.
///
/// A letter's hint is looked up for the original plaintext letter, not the
/// substituted glyph: the solver sees the disguised symbol but reasons from
/// the true letter's frequency.
pub fn tokenize(
    plaintext: &str,
    substitution: &SubstitutionMap,
    frequencies: &FrequencyTable,
) -> Vec<CipherToken> {
    plaintext
        .chars()
        .map(|ch| match (substitution.encode(ch), frequencies.hint(ch)) {
            (Some(glyph), Some(hint)) => CipherToken::Letter { glyph, hint },
            _ if ch == '\'' => CipherToken::Apostrophe,
            _ if ch.is_whitespace() => CipherToken::Space,
            _ => CipherToken::Other(ch),
        })
        .collect()
}
