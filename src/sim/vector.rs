//! Immutable 2D point/displacement
//!
//! Every operation returns a new value; operands are `Copy` and never mutated.

use std::ops::{Add, Mul, Neg};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A position, size or velocity in grid units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        (DVec2::from(self) + DVec2::from(other)).into()
    }

    /// Component-wise scale
    #[inline]
    pub fn times(self, factor: f64) -> Vector {
        (DVec2::from(self) * factor).into()
    }

    /// True when neither component is NaN or infinite
    #[inline]
    pub fn is_finite(self) -> bool {
        DVec2::from(self).is_finite()
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.times(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.times(-1.0)
    }
}
