//! Babble: nonsense sentences assembled from word lists.
//!
//! Each line of the `babble` list is a template whose placeholders name
//! other lists, e.g. `The {adjective} {noun} {verb}.` Every placeholder
//! occurrence gets its own draw. When the same list appears twice in one
//! sentence and the draw repeats an earlier one, it is re-drawn once.

use std::collections::HashMap;

use rand::Rng;

use super::prompts::pick;
use crate::cache::WordCache;
use crate::error::{BotResult, CacheError};
use crate::response::Response;
use crate::select::choose;
use crate::template::Template;

/// List holding the sentence templates.
pub const BABBLE_TEMPLATES: &str = "babble";

/// Build `count` babble sentences, capped at `max`. A missing or malformed
/// count means one.
pub fn babble<R: Rng + ?Sized>(
    cache: &WordCache,
    rng: &mut R,
    max: usize,
    args: &[&str],
) -> BotResult<Response> {
    let count = args
        .first()
        .and_then(|a| a.parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, max.max(1));

    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        sentences.push(sentence(cache, rng)?);
    }
    Ok(Response::lines(sentences))
}

/// Build one babble sentence.
pub fn sentence<R: Rng + ?Sized>(cache: &WordCache, rng: &mut R) -> BotResult<String> {
    let template = Template::parse(pick(cache, rng, BABBLE_TEMPLATES)?);

    for name in template.placeholders() {
        if cache.category(name)?.is_empty() {
            return Err(CacheError::MissingCategory(name.to_string()).into());
        }
    }

    let mut drawn: HashMap<String, Vec<String>> = HashMap::new();
    let text = template.render_with(|name| {
        let items = cache.get(name)?;
        let previous = drawn.entry(name.to_string()).or_default();
        let mut word = choose(rng, items)?;
        if previous.iter().any(|p| p == word) {
            word = choose(rng, items)?;
        }
        previous.push(word.to_string());
        Some(word.to_string())
    })?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::sample_cache;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fills_placeholders_from_lists() {
        let mut rng = StdRng::seed_from_u64(2);
        let r = babble(&sample_cache(), &mut rng, 5, &[]).unwrap();
        assert_eq!(r.to_string(), "The purple teapot sings.");
    }

    #[test]
    fn count_is_capped() {
        let mut rng = StdRng::seed_from_u64(2);
        let r = babble(&sample_cache(), &mut rng, 5, &["40"]).unwrap();
        assert_eq!(r.lines.len(), 5);
        let r = babble(&sample_cache(), &mut rng, 5, &["two"]).unwrap();
        assert_eq!(r.lines.len(), 1);
    }

    #[test]
    fn missing_word_list_reported() {
        let mut cache = WordCache::new();
        cache.insert("babble", ["A {colour} {noun}."]);
        cache.insert("noun", ["hat"]);
        let mut rng = StdRng::seed_from_u64(2);
        let err = sentence(&cache, &mut rng).unwrap_err();
        assert!(err.to_string().contains("colour"), "{err}");
    }

    #[test]
    fn repeated_list_redraws_collisions() {
        let mut cache = WordCache::new();
        cache.insert("babble", ["{w} {w}"]);
        cache.insert("w", ["a", "b"]);
        let mut rng = StdRng::seed_from_u64(4);
        let trials = 2000;
        let same = (0..trials)
            .map(|_| sentence(&cache, &mut rng).unwrap())
            .filter(|s| s == "a a" || s == "b b")
            .count();
        // One re-draw leaves about a quarter of pairs repeated.
        assert!(same > trials / 8, "same: {same}");
        assert!(same < trials * 3 / 8, "same: {same}");
    }

    #[test]
    fn literal_only_template() {
        let mut cache = WordCache::new();
        cache.insert("babble", ["Nothing to see here."]);
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(sentence(&cache, &mut rng).unwrap(), "Nothing to see here.");
    }
}
