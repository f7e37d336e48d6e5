//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (actor list order)
//! - No rendering, input or platform dependencies

pub mod actor;
pub mod level;
pub mod parser;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorId, ActorType, Behavior, Fireball, Spring};
pub use level::{Contact, Grid, Level, Obstacle, Status, Terrain};
pub use parser::{ActorFactory, LevelParser, standard_dictionary};
pub use tick::{LevelOutcome, TickOutcome, run_level, tick};
pub use vector::Vector;
