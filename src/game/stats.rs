//! Session statistics
//!
//! Kept in memory only; a new process starts from zero.

use super::board::MAX_ATTEMPTS;
use super::state::GameStatus;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Games still in progress are ignored, so this can be called after every
    /// submission.
    pub fn record(&mut self, status: GameStatus, attempts: usize) {
        match status {
            GameStatus::InProgress => return,
            GameStatus::Won => {
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Lost => self.current_streak = 0,
        }

        self.total_games += 1;
    }

    #[must_use]
    pub fn games_lost(&self) -> usize {
        self.total_games - self.games_won
    }

    /// Win rate in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }

        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_is_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::InProgress, 3);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn wins_fill_distribution_and_streak() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::Won, 3);
        stats.record(GameStatus::Won, 3);
        stats.record(GameStatus::Won, 5);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[5], 1);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.average_guesses(), Some(11.0 / 3.0));
    }

    #[test]
    fn loss_breaks_streak_but_keeps_max() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::Won, 2);
        stats.record(GameStatus::Won, 4);
        stats.record(GameStatus::Lost, 6);
        stats.record(GameStatus::Won, 1);

        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.average_guesses(), None);
    }
}
