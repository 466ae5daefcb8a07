//! Dice rolls in `NdM` notation.

use std::collections::HashMap;

use rand::Rng;

use crate::error::BotResult;
use crate::response::Response;
use crate::template;

const ROLL_TEMPLATE: &str = "Rolled {dice}: [{rolls}] = {total}";

/// A number of dice with the same number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    /// How many dice (1-100).
    pub count: u32,
    /// Sides per die (2-1000).
    pub sides: u32,
}

impl Default for DiceSpec {
    fn default() -> Self {
        Self { count: 1, sides: 20 }
    }
}

impl DiceSpec {
    /// Parse `2d6`, `d20`, or `3D8`. Out-of-range values are clamped;
    /// anything unparseable yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let (count, sides) = s.split_once('d')?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().ok()?
        };
        let sides = sides.parse::<u32>().ok()?;
        Some(Self {
            count: count.clamp(1, 100),
            sides: sides.clamp(2, 1000),
        })
    }

    /// Roll every die.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect()
    }
}

impl std::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Roll the dice named by the first argument, or 1d20.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, args: &[&str]) -> BotResult<Response> {
    let spec = args
        .first()
        .and_then(|a| DiceSpec::parse(a))
        .unwrap_or_default();
    let rolls = spec.roll(rng);
    let total: u32 = rolls.iter().sum();
    let listed: Vec<String> = rolls.iter().map(u32::to_string).collect();

    let values = HashMap::from([
        ("dice", spec.to_string()),
        ("rolls", listed.join(", ")),
        ("total", total.to_string()),
    ]);
    Ok(Response::line(template::render(ROLL_TEMPLATE, &values)?))
}
