//! Guess scoring and verdict representation
//!
//! A verdict holds one feedback value per letter of the guess:
//! - Absent (letter not in the secret, or every occurrence already claimed)
//! - Present (letter in the secret, wrong position)
//! - Exact (letter in the correct position)

use super::{WORD_LENGTH, Word};
use crate::error::GameError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Exact,
}

impl Feedback {
    /// Numeric form: 0 = absent, 1 = present, 2 = exact
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    /// Square emoji for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Exact => '🟩',
        }
    }
}

/// Per-position feedback for one scored guess
///
/// Always exactly `WORD_LENGTH` entries; never changes after it is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Feedback; WORD_LENGTH]);

impl Verdict {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self([Feedback::Exact; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and take them out of the secret's letter counts
    /// 2. Second pass: mark present letters left to right while counts remain
    ///
    /// Earlier positions claim a limited letter first.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let secret = Word::new("speed").unwrap();
    /// let verdict = Verdict::calculate(&guess, &secret);
    ///
    /// use Feedback::{Absent, Present};
    /// assert_eq!(verdict.feedback(), &[Present, Present, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self(score(guess.chars(), secret.chars(), secret.char_counts()))
    }

    /// Score two raw strings, ignoring case
    ///
    /// Entry point for callers that have not built `Word`s. Both strings must
    /// be exactly `WORD_LENGTH` characters long.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if either string has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Verdict;
    ///
    /// let verdict = Verdict::evaluate("RULER", "ruler").unwrap();
    /// assert!(verdict.is_perfect());
    ///
    /// assert!(Verdict::evaluate("abcd", "abcde").is_err());
    /// ```
    pub fn evaluate(guess: &str, secret: &str) -> Result<Self, GameError> {
        let guess_len = guess.chars().count();
        let secret_len = secret.chars().count();

        if guess_len != WORD_LENGTH || secret_len != WORD_LENGTH {
            return Err(GameError::LengthMismatch {
                guess: guess_len,
                secret: secret_len,
            });
        }

        let guess_chars = normalized(guess);
        let secret_chars = normalized(secret);

        let mut counts: FxHashMap<char, u8> = FxHashMap::default();
        for &ch in &secret_chars {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self(score(&guess_chars, &secret_chars, counts)))
    }

    /// Feedback for each position, left to right
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Exact)
    }

    /// Machine-readable digits, e.g. `"2 2 0 1 0"`
    #[must_use]
    pub fn to_digits(&self) -> String {
        self.0
            .iter()
            .map(|f| f.digit().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert verdict to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Lowercase one character to one character, so lengths never change
fn normalized(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Two-pass duplicate-aware scoring over equal-length letter slices
fn score<T: Copy + Eq + Hash>(
    guess: &[T],
    secret: &[T],
    mut remaining: FxHashMap<T, u8>,
) -> [Feedback; WORD_LENGTH] {
    debug_assert_eq!(guess.len(), WORD_LENGTH);
    debug_assert_eq!(secret.len(), WORD_LENGTH);

    let mut result = [Feedback::Absent; WORD_LENGTH];

    // First pass: exact position matches
    for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            result[i] = Feedback::Exact;
            if let Some(count) = remaining.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, leftmost first
    for (i, g) in guess.iter().enumerate() {
        if result[i] == Feedback::Exact {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            result[i] = Feedback::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Exact, Present};
    use pretty_assertions::assert_eq;

    fn verdict(guess: &str, secret: &str) -> [Feedback; WORD_LENGTH] {
        *Verdict::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap()).feedback()
    }

    #[test]
    fn verdict_perfect_constant() {
        assert!(Verdict::PERFECT.is_perfect());
        assert_eq!(Verdict::PERFECT.feedback(), &[Exact; WORD_LENGTH]);
        assert_eq!(Verdict::PERFECT.to_digits(), "2 2 2 2 2");
    }

    #[test]
    fn identical_words_are_perfect() {
        for word in ["ruler", "crane", "speed", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Verdict::calculate(&w, &w), Verdict::PERFECT);
        }
    }

    #[test]
    fn all_absent() {
        assert_eq!(verdict("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn crane_block() {
        assert_eq!(
            verdict("block", "crane"),
            [Absent, Absent, Absent, Present, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letters_leftmost_claims_first() {
        // SPEED has two E's; the third E in the guess gets nothing
        assert_eq!(
            verdict("eerie", "speed"),
            [Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_consumes_before_present() {
        assert_eq!(
            verdict("books", "brook"),
            [Exact, Present, Exact, Present, Absent]
        );
    }

    #[test]
    fn later_exact_beats_earlier_present() {
        // Only one L in the secret, claimed by the exact match at the end
        assert_eq!(
            verdict("lobel", "hotel"),
            [Absent, Exact, Absent, Exact, Exact]
        );
    }

    #[test]
    fn letter_count_conservation() {
        let cases = [
            ("eerie", "speed"),
            ("books", "brook"),
            ("aaaaa", "banal"),
            ("speed", "erase"),
            ("robot", "floor"),
        ];
        for (guess, secret) in cases {
            let v = verdict(guess, secret);
            for letter in guess.bytes() {
                let marked = guess
                    .bytes()
                    .zip(v)
                    .filter(|&(g, f)| g == letter && f != Absent)
                    .count();
                let available = secret.bytes().filter(|&s| s == letter).count();
                assert!(
                    marked <= available,
                    "{guess} vs {secret}: {marked} marks for '{}' but only {available} in secret",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluate_ignores_case() {
        let lower = Verdict::evaluate("books", "brook").unwrap();
        assert_eq!(Verdict::evaluate("BOOKS", "brook").unwrap(), lower);
        assert_eq!(Verdict::evaluate("books", "BROOK").unwrap(), lower);
        assert_eq!(Verdict::evaluate("BoOkS", "bRoOk").unwrap(), lower);
    }

    #[test]
    fn evaluate_matches_calculate() {
        let guess = Word::new("eerie").unwrap();
        let secret = Word::new("speed").unwrap();
        assert_eq!(
            Verdict::evaluate("eerie", "speed").unwrap(),
            Verdict::calculate(&guess, &secret)
        );
    }

    #[test]
    fn evaluate_rejects_wrong_lengths() {
        assert!(matches!(
            Verdict::evaluate("abcd", "abcde"),
            Err(GameError::LengthMismatch {
                guess: 4,
                secret: 5
            })
        ));
        assert!(matches!(
            Verdict::evaluate("abcdef", "abcde"),
            Err(GameError::LengthMismatch {
                guess: 6,
                secret: 5
            })
        ));
        assert!(matches!(
            Verdict::evaluate("abcde", ""),
            Err(GameError::LengthMismatch {
                guess: 5,
                secret: 0
            })
        ));
    }

    #[test]
    fn evaluate_counts_characters_before_lowercasing() {
        // 'İ' lowercases to two chars; it must still count as one letter
        let v = Verdict::evaluate("İabcd", "xabcd").unwrap();
        assert_eq!(v.feedback(), &[Absent, Exact, Exact, Exact, Exact]);

        assert!(matches!(
            Verdict::evaluate("İabc", "xabcd"),
            Err(GameError::LengthMismatch {
                guess: 4,
                secret: 5
            })
        ));
    }

    #[test]
    fn conservation_and_case_over_word_list() {
        let words: Vec<&str> = crate::wordlists::WORDS.iter().copied().take(60).collect();
        for &guess in &words {
            for &secret in &words {
                let v = verdict(guess, secret);
                for letter in guess.bytes() {
                    let marked = guess
                        .bytes()
                        .zip(v)
                        .filter(|&(g, f)| g == letter && f != Absent)
                        .count();
                    let available = secret.bytes().filter(|&s| s == letter).count();
                    assert!(marked <= available, "{guess} vs {secret}");
                }
                assert_eq!(
                    Verdict::evaluate(&guess.to_uppercase(), secret).unwrap().feedback(),
                    &v,
                    "{guess} vs {secret}"
                );
            }
        }
    }

    #[test]
    fn digits_and_emoji() {
        let v = Verdict::evaluate("speak", "spare").unwrap();
        assert_eq!(v.feedback(), &[Exact, Exact, Present, Present, Absent]);
        assert_eq!(v.to_digits(), "2 2 1 1 0");
        assert_eq!(v.to_emoji(), "🟩🟩🟨🟨⬜");
        assert_eq!(v.to_string(), "🟩🟩🟨🟨⬜");
    }
}
