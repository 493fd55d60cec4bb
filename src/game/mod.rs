//! Game state machine and the types renderers read from it

mod board;
mod key;
mod state;
mod stats;

pub use board::{Board, Cell, Cursor, MAX_ATTEMPTS, Row};
pub use key::{KEYBOARD_ROWS, Key};
pub use state::{Game, GameStatus, GuessError, Outcome};
pub use stats::Statistics;
