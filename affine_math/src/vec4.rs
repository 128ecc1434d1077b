use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use core::{
    fmt,
    ops::{Add, Index, Mul, Neg, Sub},
};

use crate::{Vector2, Vector3};

/// Immutable 4D vector. Rows and columns of a
/// [`Transform`](crate::Transform) are handed out as `Vector4`s.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4([f64; 4]);

impl Index<usize> for Vector4 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.0[0],
            1 => &self.0[1],
            2 => &self.0[2],
            3 => &self.0[3],
            _ => panic!("INDEXING OUT_OF_BOUNDS in Vector4"),
        }
    }
}

impl From<Vector4> for [f64; 4] {
    fn from(val: Vector4) -> Self {
        val.0
    }
}

impl From<[f64; 4]> for Vector4 {
    fn from(val: [f64; 4]) -> Self {
        Vector4(val)
    }
}

impl Vector4 {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0, 0.0]);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Vector4 {
        Vector4([x, y, z, w])
    }

    /// Homogeneous point, `w` is set to 1.
    #[inline]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Vector4 {
        Vector4([x, y, z, 1.0])
    }

    #[inline]
    pub fn from_xyz_w(xyz: Vector3, w: f64) -> Vector4 {
        Vector4([xyz.x(), xyz.y(), xyz.z(), w])
    }

    #[inline]
    pub fn from_x_yzw(x: f64, yzw: Vector3) -> Vector4 {
        Vector4([x, yzw.x(), yzw.y(), yzw.z()])
    }

    #[inline]
    pub fn from_xy_zw(xy: Vector2, zw: Vector2) -> Vector4 {
        Vector4([xy.x(), xy.y(), zw.x(), zw.y()])
    }

    #[inline]
    pub fn from_x_yz_w(x: f64, yz: Vector2, w: f64) -> Vector4 {
        Vector4([x, yz.x(), yz.y(), w])
    }

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

    #[inline]
    pub fn w(&self) -> f64 {
        self.0[3]
    }

    /// Drops the `w` component.
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self[0], self[1], self[2])
    }

    #[inline]
    pub fn add(self, other: Vector4) -> Vector4 {
        Vector4([
            self[0] + other[0],
            self[1] + other[1],
            self[2] + other[2],
            self[3] + other[3],
        ])
    }

    #[inline]
    pub fn sub(self, other: Vector4) -> Vector4 {
        Vector4([
            self[0] - other[0],
            self[1] - other[1],
            self[2] - other[2],
            self[3] - other[3],
        ])
    }

    #[inline]
    pub fn scale(self, scalar: f64) -> Vector4 {
        Vector4([
            self[0] * scalar,
            self[1] * scalar,
            self[2] * scalar,
            self[3] * scalar,
        ])
    }

    #[inline]
    pub fn dot(&self, b: &Vector4) -> f64 {
        self[0] * b[0] + self[1] * b[1] + self[2] * b[2] + self[3] * b[3]
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the vector scaled to unit length. The zero vector stays zero.
    #[inline]
    pub fn unit(self) -> Vector4 {
        let lensq = self.magnitude_squared();
        if lensq == 0.0 {
            return Vector4::ZERO;
        }
        self.scale(1.0 / lensq.sqrt())
    }

    #[inline]
    pub fn angle(&self, other: &Vector4) -> f64 {
        let cos_angle = self.dot(other) / (self.magnitude() * other.magnitude());
        cos_angle.clamp(-1.0, 1.0).acos()
    }
}

impl Add for Vector4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector4::add(self, other)
    }
}

impl Sub for Vector4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector4::sub(self, other)
    }
}

impl Mul<f64> for Vector4 {
    type Output = Vector4;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vector4 {
    type Output = Vector4;

    fn neg(self) -> Self::Output {
        Vector4([-self[0], -self[1], -self[2], -self[3]])
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self[0], self[1], self[2], self[3])
    }
}

impl AbsDiffEq for Vector4 {
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

impl RelativeEq for Vector4 {
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

impl UlpsEq for Vector4 {
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
