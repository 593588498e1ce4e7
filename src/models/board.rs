use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// A cell coordinate. `row` is the `y` axis, `col` the `x` axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, `None` if the result would be negative
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// A rectangular grid of letters, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<char>>", into = "Vec<Vec<char>>")]
pub struct Board {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Parse whitespace-separated single-character tokens into a
    /// `rows` x `cols` board, filled row by row.
    ///
    /// ```
    /// use boggle_search::Board;
    ///
    /// let board = Board::parse("N C A\nO U I", 2, 3).unwrap();
    /// assert_eq!(board.rows(), 2);
    /// assert_eq!(board.row(0), Some(&['N', 'C', 'A'][..]));
    /// ```
    pub fn parse(text: &str, rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyShape { rows, cols });
        }

        let expected = rows
            .checked_mul(cols)
            .ok_or(BoardError::ShapeOverflow { rows, cols })?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != expected {
            return Err(BoardError::ShapeMismatch {
                rows,
                cols,
                expected,
                found: tokens.len(),
            });
        }

        let cells = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| single_char(token).ok_or_else(|| BoardError::InvalidCell {
                token: token.to_string(),
                index,
            }))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Built {}x{} board", rows, cols);

        Ok(Self { cells, rows, cols })
    }

    /// Build a board from rows that are already split into cells
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyShape {
                rows: height,
                cols: width,
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, letters) in rows.into_iter().enumerate() {
            if letters.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: letters.len(),
                });
            }
            for letter in letters {
                // Display separates cells with whitespace
                if letter.is_whitespace() {
                    return Err(BoardError::InvalidCell {
                        token: letter.to_string(),
                        index: cells.len(),
                    });
                }
                cells.push(letter);
            }
        }

        tracing::debug!("Built {}x{} board", height, width);

        Ok(Self {
            cells,
            rows: height,
            cols: width,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells on the board
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a board has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Letter at `pos`, or `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<char> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Row-major index of `pos`
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols)
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }

    /// Positions holding `letter`, in row-major order
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |&pos| self.get(pos) == Some(letter))
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

impl TryFrom<Vec<Vec<char>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<char>> {
    fn from(board: Board) -> Self {
        board.iter_rows().map(<[char]>::to_vec).collect()
    }
}

/// Renders one row per line with cells separated by spaces, the same
/// layout `Board::parse` reads.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "N C A N E
                         O U I O P
                         Z Q Z O N
                         F A D P L
                         E D E A Z";

    #[test]
    fn test_parse_5x5() {
        let board = Board::parse(BOARD, 5, 5).unwrap();
        assert_eq!(board.rows(), 5);
        assert_eq!(board.cols(), 5);
        assert_eq!(board.row(0), Some(&['N', 'C', 'A', 'N', 'E'][..]));
        assert_eq!(board.row(4), Some(&['E', 'D', 'E', 'A', 'Z'][..]));
        assert_eq!(board.row(5), None);
    }

    #[test]
    fn test_parse_non_square() {
        let board = Board::parse("a b c\td e f", 2, 3).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.get(Position::new(1, 0)), Some('d'));

        let board = Board::parse("a b c d e f", 3, 2).unwrap();
        assert_eq!(board.row(1), Some(&['c', 'd'][..]));
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let board = Board::parse("  A\n\n B \t C   D  ", 2, 2).unwrap();
        assert_eq!(board.to_string(), "A B\nC D");
    }

    #[test]
    fn test_shape_mismatch() {
        assert_eq!(
            Board::parse("A B C", 2, 2),
            Err(BoardError::ShapeMismatch {
                rows: 2,
                cols: 2,
                expected: 4,
                found: 3,
            })
        );
        assert!(matches!(
            Board::parse("A B C D E", 2, 2),
            Err(BoardError::ShapeMismatch { found: 5, .. })
        ));
    }

    #[test]
    fn test_empty_shape() {
        assert_eq!(
            Board::parse("", 0, 0),
            Err(BoardError::EmptyShape { rows: 0, cols: 0 })
        );
        assert!(matches!(
            Board::parse("A", 1, 0),
            Err(BoardError::EmptyShape { .. })
        ));
    }

    #[test]
    fn test_shape_overflow() {
        assert_eq!(
            Board::parse("", usize::MAX / 2 + 1, 2),
            Err(BoardError::ShapeOverflow {
                rows: usize::MAX / 2 + 1,
                cols: 2,
            })
        );
        assert!(matches!(
            Board::parse("A", usize::MAX, usize::MAX),
            Err(BoardError::ShapeOverflow { .. })
        ));
    }

    #[test]
    fn test_multi_char_token_rejected() {
        assert_eq!(
            Board::parse("A QU C D", 2, 2),
            Err(BoardError::InvalidCell {
                token: "QU".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!(board, Board::parse("a b c d", 2, 2).unwrap());

        assert_eq!(
            Board::from_rows(vec![vec!['a', 'b'], vec!['c']]),
            Err(BoardError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
        assert!(matches!(
            Board::from_rows(Vec::new()),
            Err(BoardError::EmptyShape { .. })
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::parse(BOARD, 5, 5).unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Some('N'));
        assert_eq!(board.get(Position::new(2, 1)), Some('Q'));
        assert_eq!(board.get(Position::new(5, 0)), None);
        assert_eq!(board.get(Position::new(0, 5)), None);
    }

    #[test]
    fn test_positions_of() {
        let board = Board::parse(BOARD, 5, 5).unwrap();
        let ns: Vec<_> = board.positions_of('N').collect();
        assert_eq!(
            ns,
            vec![Position::new(0, 0), Position::new(0, 3), Position::new(2, 4)]
        );
        assert_eq!(board.positions_of('Y').count(), 0);
        assert_eq!(board.positions().count(), 25);
    }

    #[test]
    fn test_position_offset() {
        assert_eq!(Position::new(0, 0).offset(-1, 0), None);
        assert_eq!(Position::new(1, 1).offset(-1, 1), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_display_reparses() {
        let board = Board::parse(BOARD, 5, 5).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some("N C A N E"));
        assert_eq!(Board::parse(&text, 5, 5).unwrap(), board);
    }

    #[test]
    fn test_serde_as_rows() {
        let board = Board::parse("A B C D", 2, 2).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[["A","B"],["C","D"]]"#);

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        assert!(serde_json::from_str::<Board>(r#"[["A","B"],["C"]]"#).is_err());
    }

    #[test]
    fn test_whitespace_cell_rejected() {
        assert_eq!(
            Board::from_rows(vec![vec!['A', ' '], vec!['C', 'D']]),
            Err(BoardError::InvalidCell {
                token: " ".to_string(),
                index: 1,
            })
        );
        assert!(matches!(
            Board::from_rows(vec![vec!['A', 'B'], vec!['\n', 'D']]),
            Err(BoardError::InvalidCell { index: 2, .. })
        ));
        assert!(serde_json::from_str::<Board>(r#"[["A"," "],["C","D"]]"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"[["A","\t"],["C","D"]]"#).is_err());
    }

    /// Collects formatted log lines for assertions
    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(build: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, build);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_both_constructors_log_shape() {
        let logs = captured_logs(|| {
            Board::parse("A B C D E F", 2, 3).unwrap();
        });
        assert!(logs.contains("Built 2x3 board"), "{}", logs);

        let logs = captured_logs(|| {
            Board::from_rows(vec![vec!['A', 'B'], vec!['C', 'D'], vec!['E', 'F']]).unwrap();
        });
        assert!(logs.contains("Built 3x2 board"), "{}", logs);
    }

    #[test]
    fn test_from_rows_display_reparses() {
        let board = Board::from_rows(vec![vec!['é', 'B', 'c'], vec!['#', 'E', 'F']]).unwrap();
        assert_eq!(Board::parse(&board.to_string(), 2, 3).unwrap(), board);
    }
}
