//! Boggle-style board word search.
//!
//! Build a [`Board`] once, then ask whether words can be traced through it:
//!
//! ```
//! use boggle_search::{build_board, find};
//!
//! let board = build_board(
//!     "N C A N E
//!      O U I O P
//!      Z Q Z O N
//!      F A D P L
//!      E D E A Z",
//!     5,
//!     5,
//! )
//! .unwrap();
//!
//! assert!(find(&board, "NOON").unwrap());
//! assert!(!find(&board, "YES").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use crate::config::SearchConfig;
pub use error::{BoardError, SearchError};
pub use game::{Adjacency, BoardGenerator, PathValidator, Trace, WordSearch};
pub use models::{Board, Position};

/// Parse `rows * cols` whitespace-separated letters into a board, row by row
pub fn build_board(text: &str, rows: usize, cols: usize) -> Result<Board, BoardError> {
    Board::parse(text, rows, cols)
}

/// Check if `word` can be traced on `board` with king-move adjacency.
///
/// Fails with [`SearchError::InvalidWord`] for the empty word.
pub fn find(board: &Board, word: &str) -> Result<bool, SearchError> {
    WordSearch::default().contains(board, word)
}
