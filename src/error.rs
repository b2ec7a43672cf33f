use std::path::PathBuf;

use crate::game::MoveResult;

/// Caller contract violations rejected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("row {row} out of range (board has {height} rows)")]
    RowOutOfRange { row: usize, height: usize },
}

/// Errors that can occur while replaying a move sequence.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("move {index}: {source}")]
    Engine { index: usize, source: EngineError },

    #[error("move {index}: column {column} rejected ({result})")]
    Rejected {
        index: usize,
        column: usize,
        result: MoveResult,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
