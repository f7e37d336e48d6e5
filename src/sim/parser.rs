//! Text level layouts → `Level`
//!
//! Each character of each row is a symbol. `x` and `!` are grid obstacles;
//! other symbols are looked up in the parser's dictionary of actor factories.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::level::{Grid, Level, Obstacle};
use super::vector::Vector;
use crate::consts::DEFAULT_SEED;
use crate::error::Result;

/// Builds an actor whose spawn cell is at the given position
pub type ActorFactory = fn(Vector, &mut Pcg32) -> Result<Actor>;

/// The symbol set every shipped level is written in
pub fn standard_dictionary() -> HashMap<char, ActorFactory> {
    let mut dict: HashMap<char, ActorFactory> = HashMap::new();
    dict.insert('@', |pos, _| Actor::player(pos));
    dict.insert('v', |pos, _| Actor::fire_rain(pos));
    dict.insert('o', |pos, rng| Actor::coin(pos, rng));
    dict.insert('=', |pos, _| Actor::horizontal_fireball(pos));
    dict.insert('|', |pos, _| Actor::vertical_fireball(pos));
    dict
}

#[derive(Debug, Clone)]
pub struct LevelParser {
    dict: HashMap<char, ActorFactory>,
    /// Seed for the RNG handed to factories on every `parse`
    seed: u64,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl LevelParser {
    pub fn new(dict: HashMap<char, ActorFactory>) -> Self {
        Self {
            dict,
            seed: DEFAULT_SEED,
        }
    }

    /// Parser for the standard symbol set
    pub fn standard() -> Self {
        Self::new(standard_dictionary())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<ActorFactory> {
        self.dict.get(&symbol).copied()
    }

    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn create_grid<S: AsRef<str>>(&self, lines: &[S]) -> Grid {
        let cells: Vec<Vec<Option<Obstacle>>> = lines
            .iter()
            .map(|line| line.as_ref().chars().map(Self::obstacle_from_symbol).collect())
            .collect();
        Grid::new(cells)
    }

    /// Instantiate every mapped symbol at its cell
    ///
    /// Unmapped symbols and factories that fail are skipped.
    pub fn create_actors<S: AsRef<str>>(&self, lines: &[S], rng: &mut Pcg32) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, symbol) in line.as_ref().chars().enumerate() {
                let Some(factory) = self.actor_from_symbol(symbol) else {
                    continue;
                };
                match factory(Vector::new(x as f64, y as f64), rng) {
                    Ok(actor) => actors.push(actor),
                    Err(e) => log::debug!("Skipping {symbol:?} at ({x}, {y}): {e}"),
                }
            }
        }
        actors
    }

    /// Build a fresh level; the same rows and seed always give the same layout
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Level {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let grid = self.create_grid(lines);
        let actors = self.create_actors(lines, &mut rng);
        log::debug!(
            "Parsed level {}x{} with {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}
