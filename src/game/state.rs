//! Game state machine
//!
//! Turns keystrokes into validated, scored rows and tracks the game outcome.

use super::board::{Board, Cursor, MAX_ATTEMPTS};
use super::key::Key;
use crate::core::{LetterFeedback, Score, Word};
use crate::wordlists::WordRepository;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Terminal flags, both false while the game is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub done: bool,
    pub won: bool,
}

/// A rejected submission; the board is left as it was
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("not enough letters")]
    IncompleteGuess,
    #[error("nope, can't find '{0}' in the word list")]
    UnknownWord(String),
}

/// One game of worddd
///
/// Borrows the dictionary and owns everything else: the secret, the board, the
/// keyboard feedback and the status. The random source is only used to draw
/// secrets, so a seeded `R` makes a whole session reproducible.
///
/// # Examples
/// ```
/// use worddd::game::{Game, GameStatus};
/// use worddd::wordlists::WordRepository;
/// use worddd::core::Word;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let repo = WordRepository::from_slice(&["allow", "llama"]).unwrap();
/// let secret = Word::new("allow").unwrap();
/// let mut game = Game::with_secret(&repo, StdRng::seed_from_u64(0), secret);
///
/// for code in ["a", "l", "l", "o", "w", "enter"] {
///     game.handle_code(code).unwrap();
/// }
/// assert_eq!(game.status(), GameStatus::Won);
/// ```
#[derive(Debug, Clone)]
pub struct Game<'a, R: Rng = StdRng> {
    repo: &'a WordRepository,
    rng: R,
    secret: Word,
    board: Board,
    feedback: LetterFeedback,
    status: GameStatus,
}

impl<'a> Game<'a, StdRng> {
    /// Start a game seeded from the operating system
    #[must_use]
    pub fn new(repo: &'a WordRepository) -> Self {
        Self::with_rng(repo, StdRng::from_os_rng())
    }

    /// Start a reproducible game
    #[must_use]
    pub fn seeded(repo: &'a WordRepository, seed: u64) -> Self {
        Self::with_rng(repo, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a game drawing secrets from `rng`
    pub fn with_rng(repo: &'a WordRepository, mut rng: R) -> Self {
        let secret = repo.pick_secret(&mut rng).clone();
        Self::with_secret(repo, rng, secret)
    }

    /// Start a game with a chosen first secret
    ///
    /// Later games after [`Game::reset`] draw from `rng` as usual.
    pub fn with_secret(repo: &'a WordRepository, rng: R, secret: Word) -> Self {
        debug!(words = repo.len(), "starting new game");
        Self {
            repo,
            rng,
            secret,
            board: Board::default(),
            feedback: LetterFeedback::default(),
            status: GameStatus::InProgress,
        }
    }

    /// Feed one symbolic key code: a letter, `"enter"` or `"delete"`
    ///
    /// Unrecognized codes are ignored. On a successful submission the row's
    /// score is returned.
    ///
    /// # Errors
    /// Returns a [`GuessError`] when a submission is rejected.
    pub fn handle_code(&mut self, code: &str) -> Result<Option<Score>, GuessError> {
        match Key::from_code(code) {
            Some(key) => self.handle_key(key),
            None => {
                trace!(code, "ignoring unrecognized key code");
                Ok(None)
            }
        }
    }

    /// # Errors
    /// Returns a [`GuessError`] when a submission is rejected.
    pub fn handle_key(&mut self, key: Key) -> Result<Option<Score>, GuessError> {
        match key {
            Key::Letter(letter) => {
                self.type_letter(char::from(letter));
                Ok(None)
            }
            Key::Delete => {
                self.delete();
                Ok(None)
            }
            Key::Enter => self.submit(),
        }
    }

    /// Type a letter into the active row
    ///
    /// Returns whether the letter was accepted. Non-letters, a full row and a
    /// finished game are all ignored.
    pub fn type_letter(&mut self, letter: char) -> bool {
        if self.status.is_finished() || !letter.is_ascii_alphabetic() {
            return false;
        }

        let accepted = self.board.push_letter(letter.to_ascii_lowercase() as u8);
        trace!(%letter, accepted, "type letter");
        accepted
    }

    /// Remove the last letter of the active row
    pub fn delete(&mut self) -> bool {
        if self.status.is_finished() {
            return false;
        }

        let removed = self.board.pop_letter().is_some();
        trace!(removed, "delete letter");
        removed
    }

    /// Submit the active row
    ///
    /// Returns `Ok(None)` when the game is already over. Otherwise the row is
    /// scored, frozen and folded into the keyboard feedback, and the status moves
    /// to `Won`, `Lost` or stays `InProgress`.
    ///
    /// # Errors
    /// - [`GuessError::IncompleteGuess`] if the row has fewer than five letters
    /// - [`GuessError::UnknownWord`] if the word is not in the dictionary
    pub fn submit(&mut self) -> Result<Option<Score>, GuessError> {
        if self.status.is_finished() {
            return Ok(None);
        }

        let Some(row) = self.board.active_row().filter(|row| row.is_full()) else {
            debug!(letters = self.board.active_len(), "rejected incomplete guess");
            return Err(GuessError::IncompleteGuess);
        };

        let text = row.text();
        let guess = match row.word() {
            Ok(word) if self.repo.contains_word(&word) => word,
            _ => {
                debug!(guess = %text, "rejected unknown word");
                return Err(GuessError::UnknownWord(text));
            }
        };

        let score = Score::calculate(&guess, &self.secret);
        self.board.freeze_active(score);
        self.feedback = self.feedback.merge(&guess, score);

        let attempts = self.board.frozen_count();
        debug!(guess = %guess, score = %score, attempts, "scored guess");

        if guess == self.secret {
            self.status = GameStatus::Won;
        } else if attempts >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        if self.status.is_finished() {
            info!(status = ?self.status, attempts, secret = %self.secret, "game over");
        }

        Ok(Some(score))
    }

    /// Start over with a fresh secret; valid in any state
    pub fn reset(&mut self) {
        self.secret = self.repo.pick_secret(&mut self.rng).clone();
        self.board = Board::default();
        self.feedback = LetterFeedback::default();
        self.status = GameStatus::InProgress;
        debug!("game reset");
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.board.cursor(self.status.is_finished())
    }

    #[must_use]
    pub const fn feedback(&self) -> &LetterFeedback {
        &self.feedback
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome {
            done: self.status.is_finished(),
            won: matches!(self.status, GameStatus::Won),
        }
    }

    /// The hidden word; renderers should only reveal it once the game is lost
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.board.frozen_count()
    }

    /// Submitted guesses with their scores, oldest first
    pub fn guesses(&self) -> impl Iterator<Item = (Word, Score)> + '_ {
        self.board.guesses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    const WORDS: &[&str] = &[
        "allow", "llama", "crane", "slate", "geese", "robot", "floor", "world", "mamma",
    ];

    fn repo() -> WordRepository {
        WordRepository::from_slice(WORDS).unwrap()
    }

    fn game_with_secret<'a>(repo: &'a WordRepository, secret: &str) -> Game<'a> {
        Game::with_secret(repo, StdRng::seed_from_u64(3), Word::new(secret).unwrap())
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.type_letter(ch);
        }
    }

    fn guess(game: &mut Game, word: &str) -> Result<Option<Score>, GuessError> {
        type_word(game, word);
        game.submit()
    }

    #[test]
    fn new_game_starts_empty() {
        let repo = repo();
        let game = Game::seeded(&repo, 11);

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.outcome(), Outcome::default());
        assert!(game.board().is_empty());
        assert!(game.feedback().is_empty());
        assert_eq!(game.cursor(), Cursor { row: 0, column: Some(0) });
        assert!(repo.contains_word(game.secret()));
    }

    #[test]
    fn typing_advances_cursor_and_stops_at_five() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        type_word(&mut game, "crane");
        assert!(!game.type_letter('x'));
        assert_eq!(game.cursor(), Cursor { row: 0, column: Some(5) });
        assert_eq!(game.board().active_row().unwrap().text(), "crane");
    }

    #[test]
    fn five_letters_then_delete_leaves_four() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        type_word(&mut game, "crane");
        assert!(game.delete());

        assert_eq!(game.board().active_len(), 4);
        assert_eq!(game.cursor().column, Some(4));
    }

    #[test]
    fn delete_on_empty_row_is_ignored() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        assert!(!game.delete());
        assert!(game.board().is_empty());
        assert_eq!(game.cursor(), Cursor { row: 0, column: Some(0) });
    }

    #[test]
    fn non_letters_are_ignored() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        assert!(!game.type_letter('1'));
        assert!(!game.type_letter(' '));
        assert!(game.board().is_empty());
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        type_word(&mut game, "ALLOW");
        assert_eq!(game.submit(), Ok(Some(Score::PERFECT)));
    }

    #[test]
    fn incomplete_guess_is_rejected_without_changes() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        type_word(&mut game, "cran");
        let before = game.board().clone();

        assert_eq!(game.submit(), Err(GuessError::IncompleteGuess));
        assert_eq!(game.board(), &before);
        assert_eq!(game.cursor(), Cursor { row: 0, column: Some(4) });
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn submit_with_no_row_is_incomplete() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");
        assert_eq!(game.submit(), Err(GuessError::IncompleteGuess));
    }

    #[test]
    fn unknown_word_is_rejected_and_row_stays_editable() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        assert_eq!(
            guess(&mut game, "zzzzz"),
            Err(GuessError::UnknownWord("zzzzz".to_string()))
        );
        assert_eq!(game.attempts_used(), 0);
        assert!(game.feedback().is_empty());

        assert!(game.delete());
        assert!(game.type_letter('z'));
        assert_eq!(game.board().active_row().unwrap().text(), "zzzzz");
    }

    #[test]
    fn valid_guess_freezes_row_and_merges_feedback() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        let score = guess(&mut game, "llama").unwrap().unwrap();

        assert_eq!(
            score.statuses(),
            &[
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Absent,
            ]
        );
        assert!(game.board().rows()[0].is_frozen());
        assert_eq!(game.cursor(), Cursor { row: 1, column: Some(0) });
        assert_eq!(game.feedback().get(b'l'), Some(LetterStatus::Correct));
        assert_eq!(game.feedback().get(b'm'), Some(LetterStatus::Absent));
        assert!(!game.delete(), "frozen rows are not editable");
    }

    #[test]
    fn guessing_secret_wins() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        guess(&mut game, "crane").unwrap();
        guess(&mut game, "allow").unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.outcome(), Outcome { done: true, won: true });
        assert_eq!(game.board().len(), 2);
        assert_eq!(game.attempts_used(), 2);
        assert_eq!(game.cursor(), Cursor { row: 2, column: None });
    }

    #[test]
    fn six_misses_lose() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        for word in ["crane", "slate", "geese", "robot", "floor"] {
            guess(&mut game, word).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        guess(&mut game, "world").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.outcome(), Outcome { done: true, won: false });
        assert_eq!(game.board().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        for word in ["crane", "slate", "geese", "robot", "floor"] {
            guess(&mut game, word).unwrap();
        }
        guess(&mut game, "allow").unwrap();

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn finished_game_ignores_everything_but_reset() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");
        guess(&mut game, "allow").unwrap();

        let board = game.board().clone();
        assert!(!game.type_letter('a'));
        assert!(!game.delete());
        assert_eq!(game.submit(), Ok(None));
        assert_eq!(game.handle_code("enter"), Ok(None));
        assert_eq!(game.board(), &board);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn reset_restores_initial_state() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");
        for word in ["crane", "slate", "geese", "robot", "floor", "world"] {
            guess(&mut game, word).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Lost);

        game.reset();

        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().is_empty());
        assert!(game.feedback().is_empty());
        assert_eq!(game.cursor(), Cursor { row: 0, column: Some(0) });
        assert!(repo.contains_word(game.secret()));
    }

    #[test]
    fn reset_mid_game_discards_typing() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");
        guess(&mut game, "crane").unwrap();
        type_word(&mut game, "sla");

        game.reset();

        assert!(game.board().is_empty());
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn handle_code_routes_symbolic_keys() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");

        for code in ["L", "l", "a", "m", "x", "delete", "a"] {
            assert_eq!(game.handle_code(code), Ok(None));
        }
        assert_eq!(game.handle_code("tab"), Ok(None));
        assert_eq!(game.handle_code("1"), Ok(None));

        let score = game.handle_code("enter").unwrap();
        assert!(score.is_some());
        assert_eq!(game.guesses().next().unwrap().0.text(), "llama");
    }

    #[test]
    fn guesses_lists_submitted_rows_in_order() {
        let repo = repo();
        let mut game = game_with_secret(&repo, "allow");
        guess(&mut game, "crane").unwrap();
        guess(&mut game, "llama").unwrap();
        type_word(&mut game, "gee");

        let words: Vec<String> = game.guesses().map(|(w, _)| w.text().to_string()).collect();
        assert_eq!(words, ["crane", "llama"]);
    }

    #[test]
    fn seeded_games_draw_the_same_secrets() {
        let repo = WordRepository::embedded().unwrap();
        let mut a = Game::seeded(&repo, 99);
        let mut b = Game::seeded(&repo, 99);

        for _ in 0..5 {
            assert_eq!(a.secret(), b.secret());
            a.reset();
            b.reset();
        }
    }
}
