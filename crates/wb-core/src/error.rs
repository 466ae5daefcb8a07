//! Error types for the WriterBot engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Result type for command handling.
pub type BotResult<T> = Result<T, BotError>;

/// Errors raised while loading or querying the word cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The data directory does not exist or is not a directory.
    #[error("data directory not found: {0}")]
    DirNotFound(PathBuf),

    /// A file in the data directory could not be read as text.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The offending file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Walking the data directory failed.
    #[error("cannot walk data directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// No category with the given name is loaded.
    #[error("no such category: {0}")]
    MissingCategory(String),
}

/// Errors raised while rendering a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder had no value supplied.
    #[error("unresolved placeholder {{{0}}}")]
    Unresolved(String),
}

/// Errors that can occur while handling a command.
#[derive(Debug, Error)]
pub enum BotError {
    /// The command name is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A template could not be rendered.
    #[error("{0}")]
    Template(#[from] TemplateError),

    /// Loading or reloading the cache failed.
    #[error("{0}")]
    Cache(#[from] CacheError),

    /// The config file could not be read or parsed.
    #[error("invalid config {path}: {message}")]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}
