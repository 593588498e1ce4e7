use anyhow::{Context, Result};
use ::config::{Config, Environment};
use serde::Deserialize;

use crate::{
    error::BoardError,
    game::{grid::DEFAULT_SIZE, Adjacency, WordSearch},
    models::Board,
};

/// Prefix for environment overrides, e.g. `BOGGLE_ROWS=4`
pub const ENV_PREFIX: &str = "BOGGLE";

/// Board shape and search settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    pub rows: usize,
    pub cols: usize,
    pub adjacency: Adjacency,
    #[serde(default)]
    pub max_word_len: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            adjacency: Adjacency::default(),
            max_word_len: None,
        }
    }
}

impl SearchConfig {
    /// Load from `BOGGLE_*` environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Layer `env` over the defaults
    pub fn load(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("rows", DEFAULT_SIZE as i64)?
            .set_default("cols", DEFAULT_SIZE as i64)?
            .set_default("adjacency", "king")?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read board search configuration")?;

        let config: SearchConfig = settings
            .try_deserialize()
            .context("BOGGLE_ROWS and BOGGLE_COLS must be numbers, BOGGLE_ADJACENCY king or orthogonal")?;

        anyhow::ensure!(
            config.rows > 0 && config.cols > 0,
            "Board must have at least one row and column (got {}x{})",
            config.rows,
            config.cols
        );

        tracing::debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Search engine with the configured adjacency and word limit
    pub fn word_search(&self) -> WordSearch {
        let search = WordSearch::new(self.adjacency);
        match self.max_word_len {
            Some(max) => search.with_max_word_len(max),
            None => search,
        }
    }

    /// Parse `text` into a board of the configured shape
    pub fn build_board(&self, text: &str) -> Result<Board, BoardError> {
        Board::parse(text, self.rows, self.cols)
    }
}
