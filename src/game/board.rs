//! Board, rows and cells
//!
//! The board only stores typed letters and frozen scores. Everything a renderer
//! needs beyond that (cells, cursor) is derived on demand, so the row/column
//! position can never disagree with what is actually on the board.

use crate::core::{LetterStatus, Score, WORD_LENGTH, Word, WordError};

/// Maximum number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    /// `None` until the row is submitted
    pub status: Option<LetterStatus>,
}

/// One attempt: up to five letters, plus their statuses once submitted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    letters: Vec<u8>,
    score: Option<Score>,
}

impl Row {
    /// Number of filled cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.score.is_some()
    }

    #[must_use]
    pub const fn score(&self) -> Option<Score> {
        self.score
    }

    /// Typed letters joined into a string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// The row as a word
    ///
    /// # Errors
    /// Fails while the row is incomplete.
    pub fn word(&self) -> Result<Word, WordError> {
        Word::from_letters(&self.letters)
    }

    /// Exactly five cells, empty ones padded on the right
    #[must_use]
    pub fn cells(&self) -> [Cell; WORD_LENGTH] {
        let mut cells = [Cell::default(); WORD_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate() {
            cell.letter = self.letters.get(i).map(|&b| char::from(b));
            cell.status = self.score.map(|score| score.statuses()[i]);
        }
        cells
    }

    pub(crate) fn push(&mut self, letter: u8) -> bool {
        if self.is_frozen() || self.is_full() {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub(crate) fn pop(&mut self) -> Option<u8> {
        if self.is_frozen() {
            return None;
        }
        self.letters.pop()
    }

    pub(crate) fn freeze(&mut self, score: Score) {
        debug_assert!(self.is_full(), "only complete rows can be frozen");
        self.score = Some(score);
    }
}

/// Position of the input cursor
///
/// `row` counts frozen rows; `column` counts letters in the active row and is
/// `None` once the game has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: Option<usize>,
}

/// Rows played so far, at most [`MAX_ATTEMPTS`]
///
/// Frozen rows come first; the last row may be the one being typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn frozen_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_frozen()).count()
    }

    /// The row currently being typed, if one has been started
    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.rows.last().filter(|row| !row.is_frozen())
    }

    /// Letters typed into the active row
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active_row().map_or(0, Row::len)
    }

    #[must_use]
    pub fn cursor(&self, finished: bool) -> Cursor {
        Cursor {
            row: self.frozen_count(),
            column: (!finished).then(|| self.active_len().min(WORD_LENGTH)),
        }
    }

    /// Append a letter, starting a new row if needed
    pub(crate) fn push_letter(&mut self, letter: u8) -> bool {
        if self.active_row().is_none() {
            if self.rows.len() >= MAX_ATTEMPTS {
                return false;
            }
            self.rows.push(Row::default());
        }

        self.rows.last_mut().is_some_and(|row| row.push(letter))
    }

    /// Remove the last typed letter; an emptied row is dropped from the board
    pub(crate) fn pop_letter(&mut self) -> Option<u8> {
        self.active_row()?;
        let row = self.rows.last_mut()?;
        let letter = row.pop();

        if row.is_empty() {
            self.rows.pop();
        }

        letter
    }

    pub(crate) fn freeze_active(&mut self, score: Score) {
        if let Some(row) = self.rows.last_mut().filter(|row| !row.is_frozen()) {
            row.freeze(score);
        }
    }

    /// Frozen rows as (guess, score) pairs
    pub fn guesses(&self) -> impl Iterator<Item = (Word, Score)> + '_ {
        self.rows
            .iter()
            .filter_map(|row| Some((row.word().ok()?, row.score()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(board: &mut Board, letters: &str) {
        for b in letters.bytes() {
            board.push_letter(b);
        }
    }

    #[test]
    fn first_letter_creates_row() {
        let mut board = Board::default();
        assert!(board.is_empty());

        assert!(board.push_letter(b'a'));
        assert_eq!(board.len(), 1);
        assert_eq!(board.active_len(), 1);
    }

    #[test]
    fn row_holds_at_most_five_letters() {
        let mut board = Board::default();
        typed(&mut board, "allow");

        assert!(!board.push_letter(b'x'));
        assert_eq!(board.active_row().unwrap().text(), "allow");
    }

    #[test]
    fn deleting_last_letter_drops_row() {
        let mut board = Board::default();
        typed(&mut board, "ab");

        assert_eq!(board.pop_letter(), Some(b'b'));
        assert_eq!(board.pop_letter(), Some(b'a'));
        assert!(board.is_empty());
        assert_eq!(board.pop_letter(), None);
    }

    #[test]
    fn frozen_row_cannot_be_edited() {
        let mut board = Board::default();
        typed(&mut board, "allow");
        board.freeze_active(Score::PERFECT);

        assert!(board.active_row().is_none());
        assert_eq!(board.pop_letter(), None);
        assert_eq!(board.rows()[0].text(), "allow");
    }

    #[test]
    fn cells_are_padded_and_scored() {
        let mut board = Board::default();
        typed(&mut board, "all");

        let cells = board.rows()[0].cells();
        assert_eq!(cells[0].letter, Some('a'));
        assert_eq!(cells[2].letter, Some('l'));
        assert_eq!(cells[3], Cell::default());
        assert!(cells.iter().all(|cell| cell.status.is_none()));

        typed(&mut board, "ow");
        board.freeze_active(Score::PERFECT);
        let cells = board.rows()[0].cells();
        assert!(
            cells
                .iter()
                .all(|cell| cell.status == Some(LetterStatus::Correct))
        );
    }

    #[test]
    fn cursor_is_derived_from_rows() {
        let mut board = Board::default();
        assert_eq!(board.cursor(false), Cursor { row: 0, column: Some(0) });

        typed(&mut board, "allow");
        board.freeze_active(Score::PERFECT);
        typed(&mut board, "ll");

        assert_eq!(board.cursor(false), Cursor { row: 1, column: Some(2) });
        assert_eq!(board.cursor(true), Cursor { row: 1, column: None });
    }

    #[test]
    fn guesses_lists_only_frozen_rows() {
        let mut board = Board::default();
        typed(&mut board, "allow");
        board.freeze_active(Score::PERFECT);
        typed(&mut board, "lla");

        let guesses: Vec<_> = board.guesses().collect();
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].0.text(), "allow");
    }
}
