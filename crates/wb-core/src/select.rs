//! Uniform random selection from word lists.

use rand::Rng;
use rand::seq::index;

/// Pick one entry uniformly at random. Returns `None` for an empty list.
pub fn choose<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [String]) -> Option<&'a str> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}

/// Pick `n` entries without replacement.
///
/// Distinctness is by position: a list holding the same line twice can
/// return it twice. Asking for more than the list holds returns the whole
/// list in random order.
pub fn sample<'a, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [String],
    n: usize,
) -> Vec<&'a str> {
    let amount = n.min(items.len());
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].as_str())
        .collect()
}

/// Draw two entries independently, re-drawing the second once on a collision.
///
/// Repeats are still possible, just half as likely as with two plain draws.
pub fn choose_pair<'a, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [String],
) -> Option<(&'a str, &'a str)> {
    let first = choose(rng, items)?;
    let mut second = choose(rng, items)?;
    if second == first {
        second = choose(rng, items)?;
    }
    Some((first, second))
}
