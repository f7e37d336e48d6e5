//! Headless simulation step
//!
//! Advances a level the way the game loop does: actors act, the player's contacts
//! are resolved, and the finish countdown runs once the outcome is decided.
//! Player input is not part of this step.

use super::level::{Level, Obstacle, Status};

/// State of a level after one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub status: Option<Status>,
    pub finished: bool,
}

/// Result of running a level to completion (or to the tick limit)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelOutcome {
    pub status: Option<Status>,
    pub finished: bool,
    pub ticks: u32,
}

/// Advance the level by one step of `dt` seconds
pub fn tick(level: &mut Level, dt: f64) -> TickOutcome {
    level.act_actors(dt);

    if level.status.is_none() {
        resolve_player_contacts(level);
    }

    if level.status.is_some() {
        level.finish_delay -= dt;
    }

    TickOutcome {
        status: level.status,
        finished: level.is_finished(),
    }
}

/// Lava under the player first, then the first actor overlapping it
///
/// At most one contact is reported per tick; a decided level takes no more.
fn resolve_player_contacts(level: &mut Level) {
    let Some(player) = level.player().cloned() else {
        return;
    };

    if level.obstacle_at(player.pos, player.size) == Some(Obstacle::Lava) {
        level.player_touched(Obstacle::Lava, None);
        return;
    }

    if let Some(other) = level.actor_at(&player) {
        let (actor_type, id) = (other.actor_type(), other.id());
        level.player_touched(actor_type, Some(id));
    }
}

/// Step until the level finishes or `max_ticks` steps have run
pub fn run_level(level: &mut Level, dt: f64, max_ticks: u32) -> LevelOutcome {
    let mut ticks = 0;
    let mut outcome = TickOutcome {
        status: level.status,
        finished: level.is_finished(),
    };

    while !outcome.finished && ticks < max_ticks {
        outcome = tick(level, dt);
        ticks += 1;
    }

    log::debug!("Level stopped after {ticks} ticks: {:?}", outcome.status);
    LevelOutcome {
        status: outcome.status,
        finished: outcome.finished,
        ticks,
    }
}
