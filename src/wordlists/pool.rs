//! Secret word pool
//!
//! Draws secrets uniformly at random, removing each one so it cannot come up
//! again while the pool lives.

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use tracing::debug;

/// Source of random indices for the pool
///
/// Every `rand::Rng` is one; tests plug in a scripted source instead.
pub trait IndexSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// The remaining candidate secrets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Remove and return a uniformly chosen word
    ///
    /// Removal is by index, so with duplicate entries only the drawn one goes.
    /// Remaining words keep their relative order.
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if there is nothing left to draw.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::wordlists::{WordPool, loader::words_from_slice};
    ///
    /// let mut pool = WordPool::new(words_from_slice(&["apple", "bread"]));
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// let secret = pool.pick_random(&mut rng).unwrap();
    /// assert_eq!(pool.len(), 1);
    /// assert!(!pool.contains(&secret));
    /// ```
    pub fn pick_random<S: IndexSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Word, GameError> {
        let len = self.words.len();
        if len == 0 {
            return Err(GameError::EmptyPool);
        }

        // Out-of-range indices from a misbehaving source wrap instead of panicking
        let index = source.pick_index(len) % len;
        let word = self.words.remove(index);
        debug!(remaining = self.words.len(), "drew secret word");

        Ok(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl From<Vec<Word>> for WordPool {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}
