use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::DERANGEMENT_MAX_ATTEMPTS;

/// A bijection on `A..=Z` with no fixed points, so every letter is disguised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMap {
    /// Cipher letter for each plain letter, indexed by `plain - b'A'`.
    map: [u8; 26],
}

impl SubstitutionMap {
    /// Generate a fresh derangement of the alphabet.
    ///
    /// Shuffles until the permutation has no fixed points. A random
    /// permutation of 26 letters is a derangement with probability ~1/e,
    /// so this almost always succeeds within a couple of attempts; after
    /// `DERANGEMENT_MAX_ATTEMPTS` it falls back to rotating the alphabet
    /// by a random non-zero offset, which is always a derangement.
    pub fn generate_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut shuffled = ALPHABET;
        for _ in 0..DERANGEMENT_MAX_ATTEMPTS {
            shuffled.shuffle(rng);
            if is_derangement(&shuffled) {
                return Self { map: shuffled };
            }
        }

        let offset = rng.gen_range(1..26);
        debug!("derangement shuffle exhausted, using rotation offset={}", offset);
        Self { map: rotation(offset) }
    }

    /// Substituted letter for an uppercase ASCII letter; `None` otherwise.
    pub fn encode(&self, plain: char) -> Option<char> {
        if plain.is_ascii_uppercase() {
            Some(self.map[(plain as u8 - b'A') as usize] as char)
        } else {
            None
        }
    }

    /// Iterate `(plain, cipher)` pairs in alphabet order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map
            .iter()
            .enumerate()
            .map(|(i, &c)| ((b'A' + i as u8) as char, c as char))
    }
}

const ALPHABET: [u8; 26] = {
    let mut letters = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        letters[i] = b'A' + i as u8;
        i += 1;
    }
    letters
};

fn is_derangement(candidate: &[u8; 26]) -> bool {
    candidate
        .iter()
        .enumerate()
        .all(|(i, &c)| c != b'A' + i as u8)
}

/// Alphabet rotated left by `offset` positions.
fn rotation(offset: usize) -> [u8; 26] {
    let mut map = [0u8; 26];
    for (i, slot) in map.iter_mut().enumerate() {
        *slot = b'A' + ((i + offset) % 26) as u8;
    }
    map
}
