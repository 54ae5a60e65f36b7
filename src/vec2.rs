use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Immutable 2-D vector. Every operation returns a new value; the
/// receiver is never mutated.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales to unit length. A zero-length input divides by zero and
    /// yields non-finite components per IEEE-754; that is the contract,
    /// not an error.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }

    /// 90° counter-clockwise rotation.
    #[inline]
    pub fn rot_plus_90(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// 90° clockwise rotation.
    #[inline]
    pub fn rot_minus_90(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Polar angle `atan2(y, x)` in radians, range (-π, π].
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Compass bearing from `other` toward `self`, in whole degrees in
    /// [0, 360). Computed in f64: the degrees are rounded half-up to an
    /// integer BEFORE the -90° offset and the modulo; callers depend on
    /// that exact order.
    pub fn angle_between(self, other: Self) -> f64 {
        let diff = self - other;
        let angle = f64::atan2(diff.y as f64, diff.x as f64);
        let degrees = 180.0 * angle / core::f64::consts::PI;
        // Half-up rounding; a NaN angle rounds to 0 degrees instead of
        // propagating, so the result is always a finite bearing.
        let rounded = if degrees.is_nan() {
            0.0
        } else {
            (degrees + 0.5).floor()
        };
        ((360.0 + rounded) - 90.0) % 360.0
    }
}

// Equality and hashing are by bit pattern, not float ==: +0.0 != -0.0
// and NaN equals an identical NaN. Required so equal values can serve
// as hash-container keys.
impl PartialEq for Vector2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Vector2 {}

impl Hash for Vector2 {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self * rhs.x, self * rhs.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Div for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}
