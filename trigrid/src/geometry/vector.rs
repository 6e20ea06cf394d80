use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::tolerance::{approx_eq, EPS_LEN};
use crate::error::TrigridError;

/// Immutable 2D point/vector. Every operation returns a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    #[inline]
    pub fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn subtract(self, other: Vector) -> Vector {
        self.add(other.scale(-1.0))
    }

    #[inline]
    pub fn scale(self, t: f64) -> Vector {
        Vector::new(self.x * t, self.y * t)
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. Fails on a zero-length vector.
    pub fn normalize(self) -> Result<Vector, TrigridError> {
        let n = self.norm();
        if !n.is_finite() || n <= EPS_LEN {
            return Err(TrigridError::DivisionByZero);
        }
        Ok(self.scale(1.0 / n))
    }

    /// Counter-clockwise rotation by `theta` radians (y-down screens show it clockwise).
    pub fn rotate(self, theta: f64) -> Vector {
        let (s, c) = theta.sin_cos();
        Vector::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Quarter turn: `(y, -x)`.
    #[inline]
    pub fn orthogonal(self) -> Vector {
        Vector::new(self.y, -self.x)
    }

    /// Linear interpolation: `p = 0` is `self`, `p = 1` is `other`.
    #[inline]
    pub fn ratio(self, p: f64, other: Vector) -> Vector {
        self.add(other.subtract(self).scale(p))
    }

    #[inline]
    pub fn midpoint(self, other: Vector) -> Vector {
        self.ratio(0.5, other)
    }

    /// Scalar projection length of `self` onto `onto`.
    pub fn project(self, onto: Vector) -> Result<f64, TrigridError> {
        Ok(self.dot(onto.normalize()?))
    }

    /// 2D cross product (z component).
    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn distance(self, other: Vector) -> f64 {
        self.subtract(other).norm()
    }

    #[inline]
    pub fn approx_eq(self, other: Vector, eps: f64) -> bool {
        approx_eq(self.x, other.x, eps) && approx_eq(self.y, other.y, eps)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, t: f64) -> Vector {
        self.scale(t)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}
