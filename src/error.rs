use std::path::PathBuf;

/// Errors returned when a move is rejected. A rejected move leaves the engine
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Column value ({column}) is outside boundaries only possible within [1-{max}]")]
    ColumnOutOfBounds { column: i64, max: usize },

    #[error("Column ({column}) is full")]
    ColumnFull { column: usize },

    #[error("Game is already finished")]
    GameAlreadyFinished,
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
