//! Actors: every mobile entity on a level
//!
//! The variant set is closed. Behaviour is carried by [`Behavior`] and dispatched in
//! [`Actor::act`]; the public type tag is derived from it.

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::level::Terrain;
use super::vector::Vector;
use crate::consts::*;
use crate::error::{Result, SimError};

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a constructed actor
///
/// Two actors on identical coordinates are still different actors. A clone keeps
/// the identity of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ActorId(u64);

impl ActorId {
    fn next() -> Self {
        ActorId(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Type tag exposed to drivers and displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Actor => "actor",
            ActorType::Player => "player",
            ActorType::Coin => "coin",
            ActorType::Fireball => "fireball",
        }
    }
}

/// Vertical bobbing state of a coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spring {
    /// Rest position the oscillation is centred on
    pub begin: Vector,
    /// Current phase (radians)
    pub phase: f64,
    /// Phase advance per second
    pub speed: f64,
    /// Amplitude
    pub dist: f64,
}

impl Spring {
    fn offset(&self) -> Vector {
        Vector::new(0.0, self.phase.sin() * self.dist)
    }
}

/// How a fireball reacts to an obstacle in its path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Fireball {
    /// Reverse velocity
    Bounce,
    /// Jump back to the spawn point, keep velocity
    Rain { begin: Vector },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Behavior {
    Inert,
    /// Moved by the driver, never by `act`
    Player,
    Coin(Spring),
    Fireball(Fireball),
}

/// A game entity with an axis-aligned bounding box
#[derive(Debug, Clone, Serialize)]
pub struct Actor {
    id: ActorId,
    pub pos: Vector,
    pub size: Vector,
    pub speed: Vector,
    pub behavior: Behavior,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            id: ActorId::next(),
            pos: Vector::ZERO,
            size: ACTOR_SIZE.into(),
            speed: Vector::ZERO,
            behavior: Behavior::Inert,
        }
    }
}

impl Actor {
    /// Create a plain actor, rejecting non-finite vectors and negative sizes
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self> {
        Self::with_behavior(pos, size, speed, Behavior::Inert)
    }

    fn with_behavior(pos: Vector, size: Vector, speed: Vector, behavior: Behavior) -> Result<Self> {
        if !pos.is_finite() {
            return Err(SimError::type_kind("finite position vector", pos));
        }
        if !speed.is_finite() {
            return Err(SimError::type_kind("finite speed vector", speed));
        }
        if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
            return Err(SimError::type_kind("non-negative size vector", size));
        }
        Ok(Self {
            id: ActorId::next(),
            pos,
            size,
            speed,
            behavior,
        })
    }

    pub fn fireball(pos: Vector, speed: Vector) -> Result<Self> {
        Self::with_behavior(pos, FIREBALL_SIZE.into(), speed, Behavior::Fireball(Fireball::Bounce))
    }

    pub fn horizontal_fireball(pos: Vector) -> Result<Self> {
        Self::fireball(pos, HORIZONTAL_FIREBALL_SPEED.into())
    }

    pub fn vertical_fireball(pos: Vector) -> Result<Self> {
        Self::fireball(pos, VERTICAL_FIREBALL_SPEED.into())
    }

    /// Falling fireball that restarts from `pos` whenever it is blocked
    pub fn fire_rain(pos: Vector) -> Result<Self> {
        Self::with_behavior(
            pos,
            FIREBALL_SIZE.into(),
            FIRE_RAIN_SPEED.into(),
            Behavior::Fireball(Fireball::Rain { begin: pos }),
        )
    }

    /// Coin spawned in the cell at `pos`; its bobbing phase is drawn from `rng`
    pub fn coin<R: Rng>(pos: Vector, rng: &mut R) -> Result<Self> {
        let begin = pos.plus(COIN_OFFSET.into());
        let spring = Spring {
            begin,
            phase: rng.random_range(0.0..TAU),
            speed: COIN_SPRING_SPEED,
            dist: COIN_SPRING_DIST,
        };
        Self::with_behavior(begin, COIN_SIZE.into(), Vector::ZERO, Behavior::Coin(spring))
    }

    pub fn player(pos: Vector) -> Result<Self> {
        Self::with_behavior(
            pos.plus(PLAYER_OFFSET.into()),
            PLAYER_SIZE.into(),
            Vector::ZERO,
            Behavior::Player,
        )
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn actor_type(&self) -> ActorType {
        match self.behavior {
            Behavior::Inert => ActorType::Actor,
            Behavior::Player => ActorType::Player,
            Behavior::Coin(_) => ActorType::Coin,
            Behavior::Fireball(_) => ActorType::Fireball,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// Strict box overlap with another actor; never true for the same actor
    ///
    /// Boxes that only share an edge do not intersect.
    pub fn is_intersect(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        self.right() > other.left()
            && self.left() < other.right()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Where linear motion would put the actor after `time`
    #[inline]
    pub fn next_position(&self, time: f64) -> Vector {
        self.pos.plus(self.speed.times(time))
    }

    /// Advance this actor by `time` seconds
    pub fn act<T: Terrain + ?Sized>(&mut self, time: f64, terrain: &T) {
        match self.behavior {
            Behavior::Inert | Behavior::Player => {}
            Behavior::Coin(ref mut spring) => {
                spring.phase += spring.speed * time;
                self.pos = spring.begin.plus(spring.offset());
            }
            Behavior::Fireball(kind) => {
                let next = self.next_position(time);
                if terrain.obstacle_at(next, self.size).is_none() {
                    self.pos = next;
                    return;
                }
                match kind {
                    Fireball::Bounce => self.speed = self.speed.times(-1.0),
                    Fireball::Rain { begin } => self.pos = begin,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Grid, Obstacle};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn empty_grid(width: usize, height: usize) -> Grid {
        Grid::new(vec![vec![None; width]; height])
    }

    fn boxed(x: f64, y: f64, w: f64, h: f64) -> Actor {
        Actor::new(Vector::new(x, y), Vector::new(w, h), Vector::ZERO).unwrap()
    }

    #[test]
    fn test_default_actor() {
        let actor = Actor::default();
        assert_eq!(actor.pos, Vector::ZERO);
        assert_eq!(actor.size, Vector::new(1.0, 1.0));
        assert_eq!(actor.speed, Vector::ZERO);
        assert_eq!(actor.actor_type(), ActorType::Actor);
        assert_eq!(actor.actor_type().as_str(), "actor");
    }

    #[test]
    fn test_bounds() {
        let actor = boxed(30.0, 50.0, 5.0, 5.0);
        assert_eq!(actor.left(), 30.0);
        assert_eq!(actor.right(), 35.0);
        assert_eq!(actor.top(), 50.0);
        assert_eq!(actor.bottom(), 55.0);
    }

    #[test]
    fn test_invalid_vectors_rejected() {
        let negative = Actor::new(Vector::ZERO, Vector::new(-1.0, 1.0), Vector::ZERO);
        assert!(matches!(negative, Err(SimError::TypeKind { .. })));

        let nan = Actor::new(Vector::new(f64::NAN, 0.0), Vector::new(1.0, 1.0), Vector::ZERO);
        assert!(matches!(nan, Err(SimError::TypeKind { .. })));

        let inf = Actor::new(Vector::ZERO, Vector::new(1.0, 1.0), Vector::new(f64::INFINITY, 0.0));
        assert!(matches!(inf, Err(SimError::TypeKind { .. })));

        // Zero size is allowed
        assert!(Actor::new(Vector::ZERO, Vector::ZERO, Vector::ZERO).is_ok());
    }

    #[test]
    fn test_self_intersection_excluded() {
        let actor = boxed(0.0, 0.0, 1.0, 1.0);
        assert!(!actor.is_intersect(&actor));
        // A clone is the same actor
        assert!(!actor.is_intersect(&actor.clone()));
    }

    #[test]
    fn test_identical_coordinates_intersect() {
        let a = boxed(0.0, 0.0, 1.0, 1.0);
        let b = boxed(0.0, 0.0, 1.0, 1.0);
        assert_ne!(a.id(), b.id());
        assert!(a.is_intersect(&b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = boxed(0.0, 0.0, 1.0, 1.0);
        let right = boxed(1.0, 0.0, 1.0, 1.0);
        let below = boxed(0.0, 1.0, 1.0, 1.0);
        assert!(!a.is_intersect(&right));
        assert!(!a.is_intersect(&below));

        let overlapping = boxed(0.5, 0.5, 1.0, 1.0);
        assert!(a.is_intersect(&overlapping));
        let contained = boxed(0.25, 0.25, 0.5, 0.5);
        assert!(a.is_intersect(&contained));
    }

    #[test]
    fn test_variant_geometry() {
        let mut rng = Pcg32::seed_from_u64(7);
        let spawn = Vector::new(3.0, 4.0);

        let coin = Actor::coin(spawn, &mut rng).unwrap();
        assert_eq!(coin.actor_type(), ActorType::Coin);
        assert_eq!(coin.size, Vector::new(0.6, 0.6));
        assert!((coin.pos.x - 3.2).abs() < 1e-12);
        assert!((coin.pos.y - 4.1).abs() < 1e-12);

        let player = Actor::player(spawn).unwrap();
        assert_eq!(player.actor_type(), ActorType::Player);
        assert_eq!(player.pos, Vector::new(3.0, 3.5));
        assert_eq!(player.size, Vector::new(0.8, 1.5));

        assert_eq!(Actor::horizontal_fireball(spawn).unwrap().speed, Vector::new(2.0, 0.0));
        assert_eq!(Actor::vertical_fireball(spawn).unwrap().speed, Vector::new(0.0, 2.0));
        let rain = Actor::fire_rain(spawn).unwrap();
        assert_eq!(rain.speed, Vector::new(0.0, 3.0));
        assert_eq!(rain.actor_type(), ActorType::Fireball);
    }

    #[test]
    fn test_fireball_advances_when_clear() {
        let grid = empty_grid(5, 1);
        let mut fireball = Actor::horizontal_fireball(Vector::ZERO).unwrap();
        fireball.act(1.0, &grid);
        assert_eq!(fireball.pos, Vector::new(2.0, 0.0));
        assert_eq!(fireball.speed, Vector::new(2.0, 0.0));

        fireball.act(0.5, &grid);
        assert_eq!(fireball.pos, Vector::new(3.0, 0.0));
    }

    #[test]
    fn test_fireball_bounces_off_wall() {
        let grid = Grid::new(vec![vec![None, None, Some(Obstacle::Wall)]]);
        let mut fireball = Actor::horizontal_fireball(Vector::ZERO).unwrap();
        fireball.act(1.0, &grid);
        assert_eq!(fireball.pos, Vector::ZERO);
        assert_eq!(fireball.speed, Vector::new(-2.0, 0.0));
    }

    #[test]
    fn test_fireball_bounces_off_level_edge() {
        let grid = empty_grid(3, 3);
        let mut fireball = Actor::vertical_fireball(Vector::new(1.0, 1.0)).unwrap();
        // (1, 3) would stick out of the bottom edge
        fireball.act(1.0, &grid);
        assert_eq!(fireball.pos, Vector::new(1.0, 1.0));
        assert_eq!(fireball.speed, Vector::new(0.0, -2.0));
    }

    #[test]
    fn test_fire_rain_resets_to_spawn() {
        let grid = empty_grid(3, 5);
        let spawn = Vector::new(1.0, 0.0);
        let mut rain = Actor::fire_rain(spawn).unwrap();

        rain.act(1.0, &grid);
        assert_eq!(rain.pos, Vector::new(1.0, 3.0));

        rain.act(1.0, &grid);
        assert_eq!(rain.pos, spawn);
        assert_eq!(rain.speed, Vector::new(0.0, 3.0));
    }

    #[test]
    fn test_coin_bobs_around_begin() {
        // Coins ignore obstacles entirely
        let walls = Grid::new(vec![vec![Some(Obstacle::Wall); 3]; 3]);
        let mut rng = Pcg32::seed_from_u64(42);
        let mut coin = Actor::coin(Vector::new(1.0, 1.0), &mut rng).unwrap();
        let begin = coin.pos;

        for _ in 0..50 {
            coin.act(0.02, &walls);
            assert_eq!(coin.pos.x, begin.x);
            assert!((coin.pos.y - begin.y).abs() <= COIN_SPRING_DIST + 1e-12);
        }

        let Behavior::Coin(spring) = coin.behavior else {
            panic!("coin lost its spring");
        };
        assert_eq!(spring.begin, begin);
        let expected = begin.y + spring.phase.sin() * COIN_SPRING_DIST;
        assert!((coin.pos.y - expected).abs() < 1e-12);
    }

    #[test]
    fn test_coin_phase_is_seeded() {
        let mut a = Pcg32::seed_from_u64(5);
        let mut b = Pcg32::seed_from_u64(5);
        let ca = Actor::coin(Vector::ZERO, &mut a).unwrap();
        let cb = Actor::coin(Vector::ZERO, &mut b).unwrap();
        assert_eq!(ca.behavior, cb.behavior);

        let Behavior::Coin(spring) = ca.behavior else {
            panic!("not a coin");
        };
        assert!((0.0..TAU).contains(&spring.phase));
    }

    #[test]
    fn test_player_act_is_noop() {
        let grid = empty_grid(3, 3);
        let mut player = Actor::player(Vector::new(1.0, 1.0)).unwrap();
        player.speed = Vector::new(5.0, 5.0);
        let before = player.pos;
        player.act(1.0, &grid);
        assert_eq!(player.pos, before);
    }

    fn any_box() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (-20.0..20.0f64, -20.0..20.0f64, 0.0..10.0f64, 0.0..10.0f64)
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in any_box(), b in any_box()) {
            let a = boxed(a.0, a.1, a.2, a.3);
            let b = boxed(b.0, b.1, b.2, b.3);
            prop_assert_eq!(a.is_intersect(&b), b.is_intersect(&a));
        }

        #[test]
        fn never_intersects_itself(a in any_box()) {
            let a = boxed(a.0, a.1, a.2, a.3);
            prop_assert!(!a.is_intersect(&a));
        }
    }
}
