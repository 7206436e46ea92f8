// Round state machine — one mutable game instance per hosted variant.

use std::fmt;

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use super::frequency::FrequencyTable;
use super::substitution::SubstitutionMap;
use super::token::{tokenize, CipherToken};
use crate::config::QUOTE_SAMPLE_SIZE;
use crate::corpus::{QuoteCorpus, WordCorpus};

/// Construction-time validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordCorpus,
    EmptyQuoteCorpus,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordCorpus => write!(f, "word corpus is empty"),
            Self::EmptyQuoteCorpus => write!(f, "quote corpus is empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// State for one active round, fully replaced by each `generate_cipher`.
#[derive(Debug)]
struct Round {
    plaintext: String,
    substitution: SubstitutionMap,
    tokens: Vec<CipherToken>,
    frequencies: Vec<Option<u8>>,
}

/// Single-round Aristocrat cipher game over an injected word and quote corpus.
///
/// Before the first `generate_cipher` call there is no round: the accessors
/// return empty slices and `check_guess` returns false, rather than failing.
#[derive(Debug)]
pub struct AristocratGame {
    words: WordCorpus,
    quotes: QuoteCorpus,
    round: Option<Round>,
}

impl AristocratGame {
    /// Create a game over the given corpora.
    ///
    /// Both corpora must be non-empty; this is checked eagerly so a variant
    /// can never start serving rounds from bad data.
    pub fn new(words: WordCorpus, quotes: QuoteCorpus) -> Result<Self> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordCorpus.into());
        }
        if quotes.is_empty() {
            return Err(ConfigError::EmptyQuoteCorpus.into());
        }
        Ok(Self {
            words,
            quotes,
            round: None,
        })
    }

    /// Start a new round, replacing any previous round state.
    pub fn generate_cipher(&mut self) {
        self.generate_cipher_with_rng(&mut rand::thread_rng());
    }

    /// Start a new round using the supplied RNG.
    ///
    /// Picks a plaintext uniformly from the word corpus, builds a fresh
    /// derangement substitution, resamples the quote corpus for frequency
    /// hints, and tokenizes the plaintext.
    pub fn generate_cipher_with_rng<R: Rng>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;

        let raw = self
            .words
            .entries()
            .choose(rng)
            .expect("word corpus validated non-empty at construction");
        let plaintext = raw.to_uppercase();

        let substitution = SubstitutionMap::generate_with_rng(rng);
        let table = FrequencyTable::from_sample_with_rng(&self.quotes, QUOTE_SAMPLE_SIZE, rng);

        let tokens = tokenize(&plaintext, &substitution, &table);
        let frequencies = tokens.iter().map(CipherToken::hint).collect();

        debug!("round generated: {} tokens", tokens.len());
        self.round = Some(Round {
            plaintext,
            substitution,
            tokens,
            frequencies,
        });
    }

    /// Token sequence for the current round; empty before the first round.
    pub fn cipher_tokens(&self) -> &[CipherToken] {
        self.round.as_ref().map_or(&[], |r| r.tokens.as_slice())
    }

    /// Frequency hints parallel to the tokens; `None` at non-letter positions.
    pub fn token_frequencies(&self) -> &[Option<u8>] {
        self.round.as_ref().map_or(&[], |r| r.frequencies.as_slice())
    }

    /// Check a guess against the current plaintext.
    ///
    /// The guess is trimmed and uppercased first. Any string is valid;
    /// there is no round state change and no round to guess against means
    /// false.
    pub fn check_guess(&self, guess: &str) -> bool {
        match &self.round {
            Some(round) => guess.trim().to_uppercase() == round.plaintext,
            None => false,
        }
    }

    /// The current answer, empty before the first round.
    ///
    /// Exposed so the host can reveal the plaintext alongside a check
    /// result.
    pub fn plaintext(&self) -> &str {
        self.round.as_ref().map_or("", |r| r.plaintext.as_str())
    }

    /// Substitution map for the current round, if one exists.
    pub fn substitution(&self) -> Option<&SubstitutionMap> {
        self.round.as_ref().map(|r| &r.substitution)
    }

    /// Whether a round has been generated yet.
    pub fn has_round(&self) -> bool {
        self.round.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word_corpus(words: &[&str]) -> WordCorpus {
        WordCorpus::new(words.iter().map(|w| w.to_string()).collect())
    }

    fn quote_corpus() -> QuoteCorpus {
        QuoteCorpus::new(vec![
            "The only way out is through".to_string(),
            "Fortune favors the bold".to_string(),
        ])
    }

    #[test]
    fn test_empty_word_corpus_rejected() {
        let err = AristocratGame::new(word_corpus(&[]), quote_corpus()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyWordCorpus)
        );
    }

    #[test]
    fn test_empty_quote_corpus_rejected() {
        let err =
            AristocratGame::new(word_corpus(&["cat"]), QuoteCorpus::new(vec![])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyQuoteCorpus)
        );
    }

    #[test]
    fn test_no_round_sentinels() {
        let game = AristocratGame::new(word_corpus(&["cat"]), quote_corpus()).unwrap();
        assert!(!game.has_round());
        assert!(game.cipher_tokens().is_empty());
        assert!(game.token_frequencies().is_empty());
        assert!(!game.check_guess("cat"));
        assert_eq!(game.plaintext(), "");
    }

    #[test]
    fn test_round_trip_guess() {
        let mut game = AristocratGame::new(word_corpus(&["cat"]), quote_corpus()).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        game.generate_cipher_with_rng(&mut rng);

        assert_eq!(game.plaintext(), "CAT");
        assert!(game.check_guess("CAT"));
        assert!(game.check_guess("cat"));
        assert!(game.check_guess("  cat  "));
        assert!(!game.check_guess(""));
        assert!(!game.check_guess("wrong"));
    }

    #[test]
    fn test_token_count_matches_plaintext() {
        let mut game =
            AristocratGame::new(word_corpus(&["don't stop"]), quote_corpus()).unwrap();
        let mut rng = StdRng::seed_from_u64(23);
        game.generate_cipher_with_rng(&mut rng);

        let expected = game.plaintext().chars().count();
        assert_eq!(game.cipher_tokens().len(), expected);
        assert_eq!(game.token_frequencies().len(), expected);
    }

    #[test]
    fn test_accessors_are_stable_between_rounds() {
        let mut game = AristocratGame::new(word_corpus(&["river"]), quote_corpus()).unwrap();
        let mut rng = StdRng::seed_from_u64(31);
        game.generate_cipher_with_rng(&mut rng);

        let tokens_first = game.cipher_tokens().to_vec();
        let freqs_first = game.token_frequencies().to_vec();
        assert_eq!(game.cipher_tokens(), tokens_first.as_slice());
        assert_eq!(game.token_frequencies(), freqs_first.as_slice());
    }

    #[test]
    fn test_new_round_replaces_state() {
        let mut game = AristocratGame::new(word_corpus(&["alpha"]), quote_corpus()).unwrap();
        let mut rng = StdRng::seed_from_u64(37);
        game.generate_cipher_with_rng(&mut rng);
        let first = game.cipher_tokens().to_vec();

        // With one word the plaintext repeats, but the substitution is
        // redrawn, so the round is a fresh object either way.
        game.generate_cipher_with_rng(&mut rng);
        assert_eq!(game.plaintext(), "ALPHA");
        assert_eq!(game.cipher_tokens().len(), first.len());
        assert!(game.check_guess("alpha"));
    }

    #[test]
    fn test_letter_hints_follow_original_letters() {
        // Identical plaintext letters must carry identical hints, even
        // though their glyphs are identical too under one substitution.
        let mut game = AristocratGame::new(word_corpus(&["noon"]), quote_corpus()).unwrap();
        let mut rng = StdRng::seed_from_u64(41);
        game.generate_cipher_with_rng(&mut rng);

        let freqs = game.token_frequencies();
        assert_eq!(freqs[1], freqs[2]); // O == O
        assert_eq!(freqs[0], freqs[3]); // N == N
    }
}
