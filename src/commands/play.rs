//! Line-based game loop
//!
//! Prompts for a guess each attempt, re-prompting on malformed input, scores
//! it through the session, and prints the verdict.

use crate::core::{WORD_LENGTH, Word};
use crate::error::GameError;
use crate::game::{GameState, Session, Statistics};
use crate::output::{RenderStyle, write_intro, write_outcome, write_statistics, write_turn};
use crate::wordlists::{IndexSource, WordPool};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Options for the line-based game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    pub style: RenderStyle,
    /// Offer another round from the same pool after each game
    pub continuous: bool,
}

/// Prompt until the player enters a well-shaped word
///
/// Empty or malformed lines are answered with a hint and a fresh prompt.
///
/// # Errors
///
/// Returns `GameError::InputClosed` if input ends, or any I/O error.
pub fn obtain_guess<R: BufRead, W: Write>(
    attempt: usize,
    input: &mut R,
    out: &mut W,
) -> Result<Word> {
    loop {
        write!(out, "Attempt {attempt}: ")?;
        out.flush()?;

        let line = read_line(input)?.ok_or(GameError::InputClosed)?;
        match Word::new(line.trim()) {
            Ok(word) => return Ok(word),
            Err(e) => {
                debug!(input = %line.trim(), error = %e, "rejected guess");
                writeln!(
                    out,
                    "Invalid input ({e}). Please enter a {WORD_LENGTH}-letter word."
                )?;
            }
        }
    }
}

/// Play one session to completion
///
/// # Errors
///
/// Returns an error if input closes mid-game or output fails.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    style: RenderStyle,
) -> Result<GameState> {
    while let Some(attempt) = session.attempt() {
        let guess = obtain_guess(attempt, input, out)?;
        let verdict = session.submit(guess.clone())?;
        write_turn(out, &guess, &verdict, style)?;
    }

    write_outcome(out, session)?;
    Ok(session.state())
}

/// Run the line-based game
///
/// Draws a secret from `pool`, plays it, and in continuous mode keeps going
/// while the player agrees and words remain.
///
/// # Errors
///
/// Returns `GameError::EmptyPool` if there is no word to start with, and any
/// input or output failure during play.
pub fn run_play<S, R, W>(
    pool: &mut WordPool,
    source: &mut S,
    mut input: R,
    mut out: W,
    config: PlayConfig,
) -> Result<Statistics>
where
    S: IndexSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut stats = Statistics::default();
    let mut secret = pool.pick_random(source)?;

    write_intro(&mut out)?;

    loop {
        let mut session = Session::new(secret);
        let outcome = play_session(&mut session, &mut input, &mut out, config.style)?;
        stats.record(outcome);
        info!(?outcome, games = stats.total_games, "game finished");

        if !config.continuous {
            break;
        }
        if pool.is_empty() {
            writeln!(out, "\nNo words left in the pool.")?;
            break;
        }

        write_statistics(&mut out, &stats)?;
        write!(out, "\nPlay again? (yes/no): ")?;
        out.flush()?;

        let answer = read_line(&mut input)?.unwrap_or_default();
        if !matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            break;
        }

        secret = pool.pick_random(source)?;
        writeln!(out)?;
    }

    if config.continuous {
        write_statistics(&mut out, &stats)?;
    }

    Ok(stats)
}

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn obtain_guess_reprompts_until_valid() {
        let mut input = Cursor::new("\nabc\nhe11o\n  Crane  \n");
        let mut out = Vec::new();

        let guess = obtain_guess(3, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(guess.text(), "crane");
        assert_eq!(text.matches("Attempt 3: ").count(), 4);
        assert_eq!(text.matches("Invalid input").count(), 3);
    }

    #[test]
    fn obtain_guess_reports_closed_input() {
        let mut input = Cursor::new("nope\n");
        let mut out = Vec::new();

        let err = obtain_guess(1, &mut input, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::InputClosed)
        ));
    }

    #[test]
    fn play_session_stops_at_win() {
        let mut session = Session::new(word("brook"));
        let mut input = Cursor::new("books\nbrook\nextra\n");
        let mut out = Vec::new();

        let state = play_session(&mut session, &mut input, &mut out, RenderStyle::Plain).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(state, GameState::Won { attempts: 2 });
        assert!(text.contains("[B](O)[O](K) s \n2 1 2 1 0\n"));
        assert!(!text.contains("Attempt 3"));
    }

    #[test]
    fn play_session_reveals_secret_on_loss() {
        let mut session = Session::new(word("crane"));
        let mut input = Cursor::new("block\n".repeat(crate::core::MAX_ATTEMPTS));
        let mut out = Vec::new();

        let state = play_session(&mut session, &mut input, &mut out, RenderStyle::Emoji).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(state, GameState::Lost);
        assert!(text.contains("The word was 'crane'"));
    }
}
