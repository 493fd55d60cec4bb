//! Terminal output formatting
//!
//! Colored rows, keyboard feedback and result reports for the console.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_game_over, print_score_result, print_simulation_result, print_statistics,
};
