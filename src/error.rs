use thiserror::Error;

/// Errors raised while building a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} cells for a {rows}x{cols} board, found {found}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("a {rows}x{cols} board has more cells than can be addressed")]
    ShapeOverflow { rows: usize, cols: usize },

    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyShape { rows: usize, cols: usize },

    #[error("cell {index} is {token:?}, expected a single character")]
    InvalidCell { token: String, index: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised by a word query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("cannot search for an empty word")]
    InvalidWord,

    #[error("word has {len} letters, the limit is {max}")]
    WordTooLong { len: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = BoardError::ShapeMismatch {
            rows: 5,
            cols: 5,
            expected: 25,
            found: 24,
        };
        assert_eq!(
            err.to_string(),
            "expected 25 cells for a 5x5 board, found 24"
        );
    }

    #[test]
    fn test_shape_overflow_message() {
        let err = BoardError::ShapeOverflow { rows: 3, cols: 7 };
        assert_eq!(
            err.to_string(),
            "a 3x7 board has more cells than can be addressed"
        );
    }

    #[test]
    fn test_invalid_cell_message() {
        let err = BoardError::InvalidCell {
            token: "QU".to_string(),
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "cell 3 is \"QU\", expected a single character"
        );
    }
}
