use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use core::{
    fmt,
    ops::{Add, Index, Mul, Neg, Sub},
};

use crate::Vector2;

/// Immutable 3D vector. Doubles as a point when fed to
/// [`Transform::applied_to`](crate::Transform::applied_to).
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3([f64; 3]);

impl Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.0[0],
            1 => &self.0[1],
            2 => &self.0[2],
            _ => panic!("INDEXING OUT_OF_BOUNDS in Vector3"),
        }
    }
}

//Make accessors for x/y/z
impl Vector3 {
    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0[2]
    }
}

impl Vector3 {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);
    pub const UNIT_X: Self = Self([1.0, 0.0, 0.0]);
    pub const UNIT_Y: Self = Self([0.0, 1.0, 0.0]);
    pub const UNIT_Z: Self = Self([0.0, 0.0, 1.0]);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3([x, y, z])
    }

    #[inline]
    pub fn from_xy(xy: Vector2, z: f64) -> Vector3 {
        Vector3([xy.x(), xy.y(), z])
    }

    #[inline]
    pub fn from_yz(x: f64, yz: Vector2) -> Vector3 {
        Vector3([x, yz.x(), yz.y()])
    }

    #[inline]
    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3([self[0] + other[0], self[1] + other[1], self[2] + other[2]])
    }

    #[inline]
    pub fn sub(self, other: Vector3) -> Vector3 {
        Vector3([self[0] - other[0], self[1] - other[1], self[2] - other[2]])
    }

    #[inline]
    pub fn scale(self, scalar: f64) -> Vector3 {
        Vector3([self[0] * scalar, self[1] * scalar, self[2] * scalar])
    }

    #[inline]
    pub fn dot(self, b: Vector3) -> f64 {
        self[0] * b[0] + self[1] * b[1] + self[2] * b[2]
    }

    #[inline]
    pub fn cross(self, b: Vector3) -> Vector3 {
        Vector3([
            self[1] * b[2] - self[2] * b[1],
            self[2] * b[0] - self[0] * b[2],
            self[0] * b[1] - self[1] * b[0],
        ])
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the vector scaled to unit length. The zero vector stays zero.
    #[inline]
    pub fn unit(self) -> Vector3 {
        let lensq = self.magnitude_squared();
        if lensq == 0.0 {
            return Vector3::ZERO;
        }
        self.scale(1.0 / lensq.sqrt())
    }

    /// Angle between `self` and `other` in radians, in `[0, pi]`.
    #[inline]
    pub fn angle(self, other: Vector3) -> f64 {
        let cos_angle = self.dot(other) / (self.magnitude() * other.magnitude());
        cos_angle.clamp(-1.0, 1.0).acos()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self[0] == 0.0 && self[1] == 0.0 && self[2] == 0.0
    }

    #[inline]
    //Linearly interpolate from a to b with a given ratio
    pub fn lerp(a: Vector3, b: Vector3, ratio: f64) -> Self {
        a + ((b - a) * ratio)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector3::sub(self, other)
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector3::add(self, other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs.scale(self)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3([-self[0], -self[1], -self[2]])
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(val: [f64; 3]) -> Self {
        Vector3(val)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(val: Vector3) -> Self {
        val.0
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self[0], self[1], self[2])
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
