// Board search engine modules

pub mod adjacency;
pub mod grid;
pub mod search;
pub mod validator;

pub use adjacency::Adjacency;
pub use grid::BoardGenerator;
pub use search::{Trace, WordSearch};
pub use validator::PathValidator;
