use rand::Rng;

use crate::{error::BoardError, models::Board, utils::letters};

/// Standard board side length
pub const DEFAULT_SIZE: usize = 5;

pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a `rows` x `cols` board with weighted letter distribution
    pub fn generate(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Board, BoardError> {
        let total = letters::total_frequency();

        let grid: Vec<Vec<char>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| letters::letter_at(rng.random::<f32>() * total))
                    .collect()
            })
            .collect();

        Board::from_rows(grid)
    }

    /// Generate a new 5x5 board from the thread-local RNG
    pub fn generate_default() -> Result<Board, BoardError> {
        Self::generate(DEFAULT_SIZE, DEFAULT_SIZE, &mut rand::rng())
    }
}
