//! Character names.
//!
//! Names always follow the Western "First Last" order regardless of the
//! origin of the individual names in the lists.

use rand::Rng;

use super::prompts::pick;
use crate::cache::WordCache;
use crate::error::{BotResult, CacheError};
use crate::response::Response;
use crate::select::choose_pair;

/// Gender of a generated first name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Drawn from `names_boys`.
    Male,
    /// Drawn from `names_girls`.
    Female,
}

impl Gender {
    /// Parse a user argument. Anything that does not read as male is female.
    pub fn from_arg(arg: &str) -> Self {
        match arg.to_lowercase().as_str() {
            "m" | "male" | "man" | "boy" => Self::Male,
            _ => Self::Female,
        }
    }

    fn first_names(self) -> &'static str {
        match self {
            Self::Male => "names_boys",
            Self::Female => "names_girls",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// A random full name, announced in two chunks.
///
/// One surname in `double_odds` is double-barrelled; its two halves are
/// drawn with a single re-draw on collision.
pub fn random_name<R: Rng + ?Sized>(
    cache: &WordCache,
    rng: &mut R,
    double_odds: u32,
    args: &[&str],
) -> BotResult<Response> {
    let gender = match args.first() {
        Some(arg) => Gender::from_arg(arg),
        None if rng.random_bool(0.5) => Gender::Male,
        None => Gender::Female,
    };

    let first = pick(cache, rng, gender.first_names())?;
    let surname = if rng.random_range(0..double_odds.max(1)) == 0 {
        let surnames = cache.category("names_surnames")?;
        let (a, b) = choose_pair(rng, surnames)
            .ok_or_else(|| CacheError::MissingCategory("names_surnames".to_string()))?;
        format!("{a}-{b}")
    } else {
        pick(cache, rng, "names_surnames")?.to_string()
    };

    Ok(Response::lines([
        format!("I've picked this {gender} name just for you:"),
        format!("{first} {surname}"),
    ]))
}
