use crate::{
    error::SearchError,
    game::Adjacency,
    models::{Board, Position},
};

/// Cells visited by a successful search, one per letter of the word
pub type Trace = Vec<Position>;

/// Decides whether a word can be traced through adjacent cells of a board
/// without using any cell twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSearch {
    adjacency: Adjacency,
    max_word_len: Option<usize>,
}

impl WordSearch {
    pub fn new(adjacency: Adjacency) -> Self {
        Self {
            adjacency,
            max_word_len: None,
        }
    }

    /// Reject words longer than `max` letters with `SearchError::WordTooLong`
    pub fn with_max_word_len(mut self, max: usize) -> Self {
        self.max_word_len = Some(max);
        self
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn max_word_len(&self) -> Option<usize> {
        self.max_word_len
    }

    /// Check if `word` can be traced anywhere on the board
    pub fn contains(&self, board: &Board, word: &str) -> Result<bool, SearchError> {
        Ok(self.find_path(board, word)?.is_some())
    }

    /// Find the first trace of `word`, trying starting cells in row-major
    /// order and neighbours in `Adjacency::steps` order.
    pub fn find_path(&self, board: &Board, word: &str) -> Result<Option<Trace>, SearchError> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Err(SearchError::InvalidWord);
        }
        if let Some(max) = self.max_word_len {
            if letters.len() > max {
                return Err(SearchError::WordTooLong {
                    len: letters.len(),
                    max,
                });
            }
        }

        tracing::debug!(
            "Searching {}x{} board for {:?} ({:?} adjacency)",
            board.rows(),
            board.cols(),
            word,
            self.adjacency
        );

        // Every letter needs its own cell
        if letters.len() > board.len() {
            return Ok(None);
        }

        let mut walk = Walk::new(board, self.adjacency.steps(), &letters);
        for start in board.positions_of(letters[0]) {
            tracing::trace!("Trying {:?} from {:?}", word, start);
            if let Some(trace) = walk.trace_from(start) {
                tracing::debug!("Found {:?} at {:?}", word, trace);
                return Ok(Some(trace));
            }
        }

        Ok(None)
    }
}

struct Frame {
    pos: Position,
    next_step: usize,
}

/// Depth-first walk state. The frame at depth `d` holds the cell matched to
/// `letters[d]`; a cell is marked in `visited` exactly while its frame is on
/// the stack.
struct Walk<'a> {
    board: &'a Board,
    steps: &'static [(isize, isize)],
    letters: &'a [char],
    visited: Vec<bool>,
    stack: Vec<Frame>,
}

impl<'a> Walk<'a> {
    fn new(board: &'a Board, steps: &'static [(isize, isize)], letters: &'a [char]) -> Self {
        Self {
            board,
            steps,
            letters,
            visited: vec![false; board.len()],
            stack: Vec::with_capacity(letters.len()),
        }
    }

    fn trace_from(&mut self, start: Position) -> Option<Trace> {
        self.stack.clear();
        self.visited.fill(false);

        self.enter(start, 0);

        loop {
            let depth = self.stack.len();
            if depth == self.letters.len() {
                return Some(self.stack.iter().map(|frame| frame.pos).collect());
            }

            let frame = self.stack.last_mut()?;
            if frame.next_step == self.steps.len() {
                // Backtrack
                let pos = frame.pos;
                self.stack.pop();
                self.release(pos);
                continue;
            }

            let (d_row, d_col) = self.steps[frame.next_step];
            frame.next_step += 1;

            if let Some(next) = frame.pos.offset(d_row, d_col) {
                self.enter(next, depth);
            }
        }
    }

    /// Push `pos` as the cell for `letters[depth]` if it is on the board,
    /// unvisited and holds that letter
    fn enter(&mut self, pos: Position, depth: usize) {
        let Some(index) = self.board.index_of(pos) else {
            return;
        };
        if self.visited[index] || self.board.get(pos) != Some(self.letters[depth]) {
            return;
        }

        self.visited[index] = true;
        self.stack.push(Frame { pos, next_step: 0 });
    }

    fn release(&mut self, pos: Position) {
        if let Some(index) = self.board.index_of(pos) {
            self.visited[index] = false;
        }
    }
}
