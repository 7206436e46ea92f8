use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::MIN_FREQUENCY_HINT;
use crate::corpus::QuoteCorpus;

/// Per-letter frequency hints derived from a random sample of quotes.
///
/// Each hint is the letter's share of all letter occurrences in the sample,
/// as an integer percentage floored at 1, so every letter has a positive
/// hint even when it never appeared. Rebuilt per round so hints vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    hints: [u8; 26],
}

impl FrequencyTable {
    /// Build a hint table from `sample_size` quotes drawn with replacement.
    pub fn from_sample_with_rng<R: Rng>(
        quotes: &QuoteCorpus,
        sample_size: usize,
        rng: &mut R,
    ) -> Self {
        let mut counts = [0u64; 26];
        for _ in 0..sample_size {
            if let Some(quote) = quotes.entries().choose(rng) {
                for ch in quote.chars() {
                    let upper = ch.to_ascii_uppercase();
                    if upper.is_ascii_uppercase() {
                        counts[(upper as u8 - b'A') as usize] += 1;
                    }
                }
            }
        }

        let total: u64 = counts.iter().sum::<u64>().max(1);
        let mut hints = [0u8; 26];
        for (slot, &count) in hints.iter_mut().zip(counts.iter()) {
            *slot = ((count * 100 / total) as u8).max(MIN_FREQUENCY_HINT);
        }
        Self { hints }
    }

    /// Hint for an uppercase ASCII letter; `None` otherwise.
    pub fn hint(&self, letter: char) -> Option<u8> {
        if letter.is_ascii_uppercase() {
            Some(self.hints[(letter as u8 - b'A') as usize])
        } else {
            None
        }
    }
}
