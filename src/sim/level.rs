//! Level state: the static obstacle grid plus the live actor list
//!
//! A level moves from playing (`status == None`) to won/lost, then counts
//! `finish_delay` down before it reports itself finished.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorType};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;

/// Static obstacle occupying a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

/// Terminal outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Won,
    Lost,
}

/// Anything that can answer obstacle queries for a moving box
pub trait Terrain {
    fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle>;
}

/// Obstacle layout, one row per text line. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    cells: Vec<Vec<Option<Obstacle>>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        let height = cells.len();
        Self {
            cells,
            width,
            height,
        }
    }

    /// Length of the longest row
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Option<Obstacle>>] {
        &self.cells
    }

    /// Obstacle stored at a cell; cells past the end of a short row are empty
    pub fn cell(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }
}

impl Terrain for Grid {
    /// First obstacle under the box at `pos` with `size`
    ///
    /// Any cell the box touches, even fractionally, counts. Outside the grid the
    /// left, right and top edges are walls and everything below is lava; the wall
    /// edges win when both apply.
    fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let left = pos.x.floor();
        let right = (pos.x + size.x).ceil();
        let top = pos.y.floor();
        let bottom = (pos.y + size.y).ceil();

        if left < 0.0 || right > self.width as f64 || top < 0.0 {
            return Some(Obstacle::Wall);
        }
        if bottom > self.height as f64 {
            return Some(Obstacle::Lava);
        }

        for y in top as usize..bottom as usize {
            for x in left as usize..right as usize {
                if let Some(obstacle) = self.cell(x, y) {
                    return Some(obstacle);
                }
            }
        }
        None
    }
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Obstacle(Obstacle),
    Actor(ActorType),
}

impl From<Obstacle> for Contact {
    fn from(obstacle: Obstacle) -> Self {
        Contact::Obstacle(obstacle)
    }
}

impl From<ActorType> for Contact {
    fn from(actor_type: ActorType) -> Self {
        Contact::Actor(actor_type)
    }
}

/// A playable level
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    pub grid: Grid,
    /// Live actors in insertion order
    pub actors: Vec<Actor>,
    /// Handle of the player actor, resolved once at construction
    pub player: Option<ActorId>,
    pub status: Option<Status>,
    pub finish_delay: f64,
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let player = actors
            .iter()
            .find(|a| a.actor_type() == ActorType::Player)
            .map(Actor::id);
        Self {
            grid,
            actors,
            player,
            status: None,
            finish_delay: FINISH_DELAY,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The player, if it is still on the level
    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actor(id))
    }

    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        let id = self.player?;
        self.actors.iter_mut().find(|a| a.id() == id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id() == id)
    }

    /// True once a status is set and the finish countdown has gone negative
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First actor in list order that intersects `actor`
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|other| actor.is_intersect(other))
    }

    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove the actor with this identity; no-op when it is not on the level
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(index) = self.actors.iter().position(|a| a.id() == id) {
            self.actors.remove(index);
        }
    }

    pub fn no_more_actors(&self, actor_type: ActorType) -> bool {
        !self.actors.iter().any(|a| a.actor_type() == actor_type)
    }

    /// Run every actor's behaviour for one step, in list order
    pub fn act_actors(&mut self, time: f64) {
        for actor in self.actors.iter_mut() {
            actor.act(time, &self.grid);
        }
    }

    /// React to the player touching an obstacle or another actor
    ///
    /// Lava and fireballs lose the level, even when a status is already set.
    /// A coin is removed and the level is won when none remain.
    pub fn player_touched(&mut self, contact: impl Into<Contact>, actor: Option<ActorId>) {
        match contact.into() {
            Contact::Obstacle(Obstacle::Lava) | Contact::Actor(ActorType::Fireball) => {
                self.set_status(Status::Lost);
            }
            Contact::Actor(ActorType::Coin) => {
                if let Some(id) = actor {
                    self.remove_actor(id);
                    log::debug!("Coin {:?} collected", id);
                }
                if self.no_more_actors(ActorType::Coin) {
                    self.set_status(Status::Won);
                }
            }
            _ => {}
        }
    }

    fn set_status(&mut self, status: Status) {
        if self.status != Some(status) {
            log::info!("Level status {:?} -> {:?}", self.status, status);
        }
        self.status = Some(status);
    }
}

impl Terrain for Level {
    fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }
}
