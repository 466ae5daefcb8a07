//! Single-list prompts: plot bunnies, plot ninjas, professions.

use std::collections::HashMap;

use rand::Rng;

use super::capitalize;
use crate::cache::WordCache;
use crate::error::{BotResult, CacheError};
use crate::response::Response;
use crate::select::{choose, sample};
use crate::template::Template;

/// Most ninjas handed out by one call.
const MAX_NINJAS: usize = 10;

/// Draw one line from a category, treating an empty list as missing.
pub(crate) fn pick<'a, R: Rng + ?Sized>(
    cache: &'a WordCache,
    rng: &mut R,
    category: &str,
) -> Result<&'a str, CacheError> {
    choose(rng, cache.category(category)?)
        .ok_or_else(|| CacheError::MissingCategory(category.to_string()))
}

/// A story hook. `{mc}` in the hook becomes the first argument, capitalised,
/// or the configured blank when no name is given.
pub fn plot_bunny<R: Rng + ?Sized>(
    cache: &WordCache,
    rng: &mut R,
    blank_name: &str,
    args: &[&str],
) -> BotResult<Response> {
    let mc = args
        .first()
        .map(|name| capitalize(name))
        .unwrap_or_else(|| blank_name.to_string());
    let bunny = pick(cache, rng, "bunnies")?;
    let values = HashMap::from([("mc", mc)]);
    Ok(Response::line(Template::parse(bunny).render(&values)?))
}

/// One plot ninja, or several distinct ones when the first argument is a
/// number.
pub fn plot_ninja<R: Rng + ?Sized>(
    cache: &WordCache,
    rng: &mut R,
    args: &[&str],
) -> BotResult<Response> {
    let count = args
        .first()
        .and_then(|a| a.parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_NINJAS);

    if count == 1 {
        return Ok(Response::line(pick(cache, rng, "ninjas")?));
    }
    let ninjas = cache.category("ninjas")?;
    let picked = sample(rng, ninjas, count);
    if picked.is_empty() {
        return Err(CacheError::MissingCategory("ninjas".to_string()).into());
    }
    Ok(Response::lines(picked))
}

/// A random profession.
pub fn random_profession<R: Rng + ?Sized>(
    cache: &WordCache,
    rng: &mut R,
) -> BotResult<Response> {
    Ok(Response::line(pick(cache, rng, "professions")?))
}
