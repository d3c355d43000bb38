//! Word list loading utilities
//!
//! Turns line-oriented text into a list of playable words. Each line is
//! trimmed, kept only if it is exactly `WORD_LENGTH` letters, and lowercased.
//! Anything else is dropped silently. Input order is preserved.

use crate::core::Word;
use crate::error::GameError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// Returns the well-shaped entries in file order, skipping any invalid lines.
///
/// # Errors
///
/// Returns `GameError::SourceUnavailable` if the file cannot be opened or read.
/// An empty result is not an error here; callers decide whether it is fatal.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "word list unreadable");
        GameError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let words = words_from_lines(content.lines());
    debug!(path = %path.display(), kept = words.len(), "loaded word list");

    Ok(words)
}

/// Filter and normalize raw lines into words
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["Apple", "pear", "  SPACE "]);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["apple", "space"]);
/// ```
pub fn words_from_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dropped = 0usize;
    let words: Vec<Word> = lines
        .into_iter()
        .filter_map(|line| {
            let word = Word::new(line.trim()).ok();
            if word.is_none() {
                dropped += 1;
            }
            word
        })
        .collect();

    if dropped > 0 {
        debug!(kept = words.len(), dropped, "filtered malformed entries");
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}
