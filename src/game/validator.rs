use std::collections::HashSet;

use crate::{
    game::Adjacency,
    models::{Board, Position},
};

/// Checks caller-supplied traces against a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathValidator {
    adjacency: Adjacency,
}

impl PathValidator {
    pub fn new(adjacency: Adjacency) -> Self {
        Self { adjacency }
    }

    /// Validate that positions form a valid path on the board
    pub fn is_valid_path(&self, board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions.iter().all(|&pos| board.contains(pos)) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !self.are_adjacent(window[0], window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Check if two positions are adjacent under this validator's mode
    pub fn are_adjacent(&self, pos1: Position, pos2: Position) -> bool {
        self.adjacency.are_adjacent(pos1, pos2)
    }

    /// Extract word from board positions
    pub fn extract_word(&self, board: &Board, positions: &[Position]) -> Option<String> {
        positions.iter().map(|&pos| board.get(pos)).collect()
    }

    /// Check that positions form a valid path spelling `word`
    pub fn spells(&self, board: &Board, positions: &[Position], word: &str) -> bool {
        self.is_valid_path(board, positions)
            && self.extract_word(board, positions).as_deref() == Some(word)
    }
}
