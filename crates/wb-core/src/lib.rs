//! Writing-prompt engine for WriterBot.
//!
//! Loads a directory of line-delimited word lists into memory, draws random
//! lines from them, substitutes the draws into templates, and exposes a set
//! of chat-style commands (plot bunnies, plot ninjas, names, babble, dice)
//! that return plain text responses to whatever host runs them.

pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod response;
pub mod select;
pub mod template;

pub use cache::{ReloadSummary, WordCache, WordStore};
pub use commands::WriterBot;
pub use config::BotConfig;
pub use error::{BotError, BotResult, CacheError, CacheResult, TemplateError};
pub use response::Response;
pub use template::Template;
