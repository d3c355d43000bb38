//! Wordle word representation
//!
//! A Word stores a validated, lowercased word of exactly `WORD_LENGTH` ASCII letters.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated Wordle word
///
/// Used both for secrets drawn from the pool and for player guesses, so the
/// scorer never sees a word of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

/// Check whether `word` has the shape of a playable word
///
/// True iff it has exactly `WORD_LENGTH` characters and every one of them is
/// an ASCII letter. Case is ignored.
///
/// # Examples
/// ```
/// use wordle_game::core::is_valid;
///
/// assert!(is_valid("Crane"));
/// assert!(!is_valid("cran3"));
/// assert!(!is_valid("cranes"));
/// ```
#[must_use]
pub fn is_valid(word: &str) -> bool {
    validate(word).is_ok()
}

fn validate(word: &str) -> Result<(), WordError> {
    let len = word.chars().count();
    if len != WORD_LENGTH {
        return Err(WordError::InvalidLength(len));
    }

    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(())
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LENGTH`
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();
        validate(raw)?;

        let text = raw.to_ascii_lowercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the remaining-count table the scorer consumes.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_valid_accepts_five_letters_any_case() {
        assert!(is_valid("hello"));
        assert!(is_valid("HELLO"));
        assert!(is_valid("wOrLd"));
    }

    #[test]
    fn is_valid_rejects_wrong_length() {
        assert!(!is_valid("abc"));
        assert!(!is_valid("longer"));
        assert!(!is_valid(""));
    }

    #[test]
    fn is_valid_rejects_non_letters() {
        assert!(!is_valid("he11o"));
        assert!(!is_valid("w.rld"));
        assert!(!is_valid("cran "));
        assert!(!is_valid("héllo"));
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        // Counted in characters, not bytes
        assert_eq!(Word::new("crème"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_does_not_trim() {
        assert_eq!(Word::new(" crane"), Err(WordError::InvalidLength(6)));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "Ruler".parse().unwrap();
        assert_eq!(format!("{word}"), "ruler");
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(3).to_string(),
            "Word must be exactly 5 letters, got 3"
        );
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "Word must contain only letters A-Z"
        );
    }
}
