//! Display functions for the line-based game

use super::formatters::{RenderStyle, render_guess};
use crate::core::{MAX_ATTEMPTS, Verdict, WORD_LENGTH, Word};
use crate::game::{GameState, Session, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "WORDLE".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.\n"
    )
}

/// Print a scored guess followed by its verdict digits
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_turn<W: Write>(
    out: &mut W,
    guess: &Word,
    verdict: &Verdict,
    style: RenderStyle,
) -> io::Result<()> {
    writeln!(out, "{}", render_guess(guess, verdict, style))?;
    writeln!(out, "{}", verdict.to_digits())
}

/// Print how a finished game ended, revealing the secret on a loss
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_outcome<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    match session.state() {
        GameState::Won { attempts } => writeln!(
            out,
            "{}",
            format!(
                "Congratulations! You've guessed the word in {attempts} {}!",
                if attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        GameState::Lost => writeln!(
            out,
            "{}",
            format!(
                "Sorry, you've run out of guesses. The word was '{}'.",
                session.secret()
            )
            .red()
            .bold()
        ),
        GameState::InProgress { .. } => Ok(()),
    }
}

/// Print running statistics
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "\nGames: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )?;

    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = "█".repeat(count).green();
        writeln!(out, "   {guesses}: {bar} {count}")?;
    }
    Ok(())
}

/// Report a failure that kept the game from starting
pub fn print_setup_error(err: &dyn std::fmt::Display) {
    eprintln!("{} {err}", "Error:".red().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn turn_shows_marks_and_digits() {
        let guess = word("books");
        let verdict = Verdict::calculate(&guess, &word("brook"));
        let text = render(|out| write_turn(out, &guess, &verdict, RenderStyle::Plain));

        assert_eq!(text, "[B](O)[O](K) s \n2 1 2 1 0\n");
    }

    #[test]
    fn loss_reveals_secret() {
        let mut session = Session::new(word("crane"));
        for _ in 0..MAX_ATTEMPTS {
            session.submit(word("block")).unwrap();
        }
        let text = render(|out| write_outcome(out, &session));

        assert!(text.contains("run out of guesses"));
        assert!(text.contains("'crane'"));
    }

    #[test]
    fn win_does_not_reveal_anything_extra() {
        let mut session = Session::new(word("crane"));
        session.submit(word("crane")).unwrap();
        let text = render(|out| write_outcome(out, &session));

        assert!(text.contains("Congratulations"));
        assert!(text.contains("1 guess!"));
    }

    #[test]
    fn statistics_lines() {
        let mut stats = Statistics::default();
        stats.record(GameState::Won { attempts: 2 });
        stats.record(GameState::Lost);
        let text = render(|out| write_statistics(out, &stats));

        assert!(text.contains("Games: 2 | Won: 1 | Win rate: 50%"));
        assert_eq!(text.lines().filter(|l| l.starts_with("   ")).count(), MAX_ATTEMPTS);
    }
}
