//! Lava Runner - a tile-grid platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, actors, obstacle grid, level state)
//! - `levels`: Level-set data (JSON plans and the built-in set)
//! - `settings`: Runtime configuration for the headless runner
//! - `error`: Error type shared by the whole crate

pub mod error;
pub mod levels;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default simulation step in seconds
    pub const DEFAULT_STEP: f64 = 0.02;
    /// Finish countdown a level starts with once its status is set
    pub const FINISH_DELAY: f64 = 1.0;
    /// Seed used when no other seed is configured
    pub const DEFAULT_SEED: u64 = 0x1a7a_2024;

    /// Base actor size
    pub const ACTOR_SIZE: (f64, f64) = (1.0, 1.0);

    /// Fireball family
    pub const FIREBALL_SIZE: (f64, f64) = (1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: (f64, f64) = (2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: (f64, f64) = (0.0, 2.0);
    pub const FIRE_RAIN_SPEED: (f64, f64) = (0.0, 3.0);

    /// Coin geometry relative to its spawn cell
    pub const COIN_SIZE: (f64, f64) = (0.6, 0.6);
    pub const COIN_OFFSET: (f64, f64) = (0.2, 0.1);
    /// Bobbing phase advance per second
    pub const COIN_SPRING_SPEED: f64 = 8.0;
    /// Bobbing amplitude
    pub const COIN_SPRING_DIST: f64 = 0.07;

    /// Player geometry relative to its spawn cell
    pub const PLAYER_SIZE: (f64, f64) = (0.8, 1.5);
    pub const PLAYER_OFFSET: (f64, f64) = (0.0, -0.5);
}
