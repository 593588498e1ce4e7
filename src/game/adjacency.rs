use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Which neighbouring cells a trace may step to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjacency {
    /// All 8 surrounding cells, diagonals included
    #[default]
    King,
    /// Only the 4 cells sharing an edge ("NEWS")
    Orthogonal,
}

/// `(d_row, d_col)` steps, `d_row` outer and `d_col` inner, both ascending.
const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL_STEPS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

impl Adjacency {
    /// Neighbour offsets in search order
    pub fn steps(self) -> &'static [(isize, isize)] {
        match self {
            Adjacency::King => &KING_STEPS,
            Adjacency::Orthogonal => &ORTHOGONAL_STEPS,
        }
    }

    /// Check if two positions are one step apart under this mode
    pub fn are_adjacent(self, a: Position, b: Position) -> bool {
        let row_diff = a.row.abs_diff(b.row);
        let col_diff = a.col.abs_diff(b.col);

        match self {
            Adjacency::King => row_diff <= 1 && col_diff <= 1 && row_diff + col_diff > 0,
            Adjacency::Orthogonal => row_diff + col_diff == 1,
        }
    }
}
