//! In-memory statistics across the games of one process

use super::session::GameState;
use crate::core::MAX_ATTEMPTS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record a finished game; unfinished states are ignored
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::Won { attempts } => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            GameState::Lost => self.total_games += 1,
            GameState::InProgress { .. } => {}
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(GameState::Won { attempts: 3 });
        stats.record(GameState::Won { attempts: 3 });
        stats.record(GameState::Lost);
        stats.record(GameState::InProgress { attempt: 2 });

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
