use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use core::{
    fmt,
    ops::{Add, Index, Mul, Neg, Sub},
};

use crate::{error::Result, TransformError, Vector3, Vector4};

/// Selects one of the four rows of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
}

/// Selects one of the four columns of a [`Transform`], labelled after the
/// basis axis they act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    I = 0,
    J = 1,
    K = 2,
    W = 3,
}

impl Row {
    pub const ALL: [Row; 4] = [Row::One, Row::Two, Row::Three, Row::Four];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Column {
    pub const ALL: [Column; 4] = [Column::I, Column::J, Column::K, Column::W];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Row {
    type Error = TransformError;

    fn try_from(index: usize) -> Result<Self> {
        TransformError::check_index(index, 4).map(|index| Row::ALL[index])
    }
}

impl TryFrom<usize> for Column {
    type Error = TransformError;

    fn try_from(index: usize) -> Result<Self> {
        TransformError::check_index(index, 4).map(|index| Column::ALL[index])
    }
}

/// Immutable 4x4 matrix stored as four row-major [`Vector4`] rows.
///
/// Points are treated as row vectors multiplied from the left, so the
/// translation of an affine transform lives in the fourth row and the
/// `w` column of the constructors in this crate is always `(0, 0, 0, 1)`.
///
/// All arithmetic happens in `f64`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform([Vector4; 4]);

impl Index<usize> for Transform {
    type Output = f64;

    /// Flat row-major component access.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`. Use [`Transform::component`] for a fallible
    /// lookup.
    fn index(&self, index: usize) -> &f64 {
        match TransformError::check_index(index, 16) {
            Ok(index) => &self.as_slice()[index],
            Err(_) => panic!("INDEXING OUT_OF_BOUNDS in Transform"),
        }
    }
}

impl Transform {
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        i1: f64, j1: f64, k1: f64, w1: f64,
        i2: f64, j2: f64, k2: f64, w2: f64,
        i3: f64, j3: f64, k3: f64, w3: f64,
        i4: f64, j4: f64, k4: f64, w4: f64,
    ) -> Transform {
        Transform([
            Vector4::new(i1, j1, k1, w1),
            Vector4::new(i2, j2, k2, w2),
            Vector4::new(i3, j3, k3, w3),
            Vector4::new(i4, j4, k4, w4),
        ])
    }

    #[inline]
    pub const fn from_rows(rows: [Vector4; 4]) -> Transform {
        Transform(rows)
    }

    pub fn from_row_major(components: &[f64; 16]) -> Transform {
        Transform(bytemuck::cast(*components))
    }

    /// Widens single precision components, as read from a GPU-side buffer.
    pub fn from_row_major_f32(components: &[f32; 16]) -> Transform {
        Self::from_row_major(&components.map(f64::from))
    }

    pub fn try_from_row_major_slice(components: &[f64]) -> Result<Transform> {
        let components: &[f64; 16] = components
            .try_into()
            .map_err(|_| TransformError::InvalidLength {
                len: components.len(),
            })?;
        Ok(Self::from_row_major(components))
    }

    /// The 16 components as one contiguous row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(&self.0)
    }

    #[inline]
    pub fn to_row_major(&self) -> [f64; 16] {
        bytemuck::cast(self.0)
    }

    #[inline]
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        self.0.map(Into::into)
    }

    pub fn component(&self, index: usize) -> Result<f64> {
        TransformError::check_index(index, 16).map(|index| self.as_slice()[index])
    }

    #[inline]
    pub fn element(&self, row: Row, column: Column) -> f64 {
        self.0[row.index()][column.index()]
    }

    pub fn row(&self, index: usize) -> Result<Vector4> {
        Row::try_from(index).map(|row| self.row_vector(row))
    }

    pub fn column(&self, index: usize) -> Result<Vector4> {
        Column::try_from(index).map(|column| self.column_vector(column))
    }

    #[inline]
    pub fn row_vector(&self, row: Row) -> Vector4 {
        self.0[row.index()]
    }

    #[inline]
    pub fn column_vector(&self, column: Column) -> Vector4 {
        let c = column.index();
        Vector4::new(self.0[0][c], self.0[1][c], self.0[2][c], self.0[3][c])
    }

    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|c| c.is_finite())
    }

    /// Composes two transforms.
    ///
    /// Row `r`, column `c` of the result is the dot product of column `c`
    /// of `self` with row `r` of `rhs`. Applying `a.multiply(&b)` to a
    /// point therefore applies `b` first and `a` second.
    pub fn multiply(&self, rhs: &Transform) -> Transform {
        let col_i = self.column_vector(Column::I);
        let col_j = self.column_vector(Column::J);
        let col_k = self.column_vector(Column::K);
        let col_w = self.column_vector(Column::W);

        Transform(rhs.0.map(|row| {
            Vector4::new(
                col_i.dot(&row),
                col_j.dot(&row),
                col_k.dot(&row),
                col_w.dot(&row),
            )
        }))
    }

    pub fn add(&self, rhs: &Transform) -> Transform {
        Transform([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }

    pub fn negate(&self) -> Transform {
        Transform(self.0.map(Neg::neg))
    }

    pub fn sub(&self, rhs: &Transform) -> Transform {
        self.add(&rhs.negate())
    }

    /// Composes with a uniform scale, `self * Transform::uniform_scale(s)`.
    pub fn scaled(&self, s: f64) -> Transform {
        self.multiply(&Transform::uniform_scale(s))
    }

    pub fn transpose(&self) -> Transform {
        Transform([
            self.column_vector(Column::I),
            self.column_vector(Column::J),
            self.column_vector(Column::K),
            self.column_vector(Column::W),
        ])
    }

    pub fn determinant(&self) -> f64 {
        let (s, c) = self.sub_determinants();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// 2x2 determinants of the upper two rows (`s`) and of the lower two
    /// rows (`c`), pairing columns ij, ik, iw, jk, jw, kw.
    fn sub_determinants(&self) -> ([f64; 6], [f64; 6]) {
        let [[i1, j1, k1, w1], [i2, j2, k2, w2], [i3, j3, k3, w3], [i4, j4, k4, w4]] =
            self.to_rows();
        (
            [
                i1 * j2 - i2 * j1,
                i1 * k2 - i2 * k1,
                i1 * w2 - i2 * w1,
                j1 * k2 - j2 * k1,
                j1 * w2 - j2 * w1,
                k1 * w2 - k2 * w1,
            ],
            [
                i3 * j4 - i4 * j3,
                i3 * k4 - i4 * k3,
                i3 * w4 - i4 * w3,
                j3 * k4 - j4 * k3,
                j3 * w4 - j4 * w3,
                k3 * w4 - k4 * w3,
            ],
        )
    }

    /// Closed-form inverse built from the cofactors of the 2x2 blocks.
    ///
    /// Singular matrices are not detected: a zero [`determinant`] yields
    /// non-finite components. Check the determinant first if the input may
    /// be degenerate.
    ///
    /// [`determinant`]: Transform::determinant
    pub fn inverse(&self) -> Transform {
        let [[i1, j1, k1, w1], [i2, j2, k2, w2], [i3, j3, k3, w3], [i4, j4, k4, w4]] =
            self.to_rows();
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.sub_determinants();

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det == 0.0 {
            log::debug!("Inverting a singular transform, result will not be finite");
        }
        let d = 1.0 / det;

        Transform::new(
            (j2 * c5 - k2 * c4 + w2 * c3) * d,
            (-j1 * c5 + k1 * c4 - w1 * c3) * d,
            (j4 * s5 - k4 * s4 + w4 * s3) * d,
            (-j3 * s5 + k3 * s4 - w3 * s3) * d,
            (-i2 * c5 + k2 * c2 - w2 * c1) * d,
            (i1 * c5 - k1 * c2 + w1 * c1) * d,
            (-i4 * s5 + k4 * s2 - w4 * s1) * d,
            (i3 * s5 - k3 * s2 + w3 * s1) * d,
            (i2 * c4 - j2 * c2 + w2 * c0) * d,
            (-i1 * c4 + j1 * c2 - w1 * c0) * d,
            (i4 * s4 - j4 * s2 + w4 * s0) * d,
            (-i3 * s4 + j3 * s2 - w3 * s0) * d,
            (-i2 * c3 + j2 * c1 - k2 * c0) * d,
            (i1 * c3 - j1 * c1 + k1 * c0) * d,
            (-i4 * s3 + j4 * s1 - k4 * s0) * d,
            (i3 * s3 - j3 * s1 + k3 * s0) * d,
        )
    }

    /// Transforms `v` as a point: `w` is taken as 1 and dropped again
    /// afterwards.
    pub fn applied_to(&self, v: Vector3) -> Vector3 {
        let a = Vector4::from_xyz_w(v, 1.0);
        Vector3::new(
            self.column_vector(Column::I).dot(&a),
            self.column_vector(Column::J).dot(&a),
            self.column_vector(Column::K).dot(&a),
        )
    }

    pub fn applied_to_vec4(&self, v: Vector4) -> Vector4 {
        Vector4::new(
            self.column_vector(Column::I).dot(&v),
            self.column_vector(Column::J).dot(&v),
            self.column_vector(Column::K).dot(&v),
            self.column_vector(Column::W).dot(&v),
        )
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.multiply(&rhs)
    }
}

impl Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Transform {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Transform {
    type Output = Transform;

    fn mul(self, rhs: f64) -> Transform {
        self.scaled(rhs)
    }
}

impl Mul<Transform> for f64 {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        rhs.scaled(self)
    }
}

impl Mul<Vector3> for Transform {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.applied_to(v)
    }
}

impl Mul<Transform> for Vector3 {
    type Output = Vector3;

    fn mul(self, t: Transform) -> Vector3 {
        t.applied_to(self)
    }
}

impl Mul<Vector4> for Transform {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        self.applied_to_vec4(v)
    }
}

impl Mul<Transform> for Vector4 {
    type Output = Vector4;

    fn mul(self, t: Transform) -> Vector4 {
        t.applied_to_vec4(self)
    }
}

impl Add for Transform {
    type Output = Transform;

    fn add(self, rhs: Transform) -> Transform {
        Transform::add(&self, &rhs)
    }
}

impl Sub for Transform {
    type Output = Transform;

    fn sub(self, rhs: Transform) -> Transform {
        Transform::sub(&self, &rhs)
    }
}

impl Neg for Transform {
    type Output = Transform;

    fn neg(self) -> Transform {
        self.negate()
    }
}

impl From<[f64; 16]> for Transform {
    fn from(components: [f64; 16]) -> Self {
        Transform::from_row_major(&components)
    }
}

impl From<[f32; 16]> for Transform {
    fn from(components: [f32; 16]) -> Self {
        Transform::from_row_major_f32(&components)
    }
}

impl From<Transform> for [f64; 16] {
    fn from(transform: Transform) -> Self {
        transform.to_row_major()
    }
}

impl From<Transform> for [[f64; 4]; 4] {
    fn from(transform: Transform) -> Self {
        transform.to_rows()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Shows where the unit basis vectors end up, e.g.
/// `[x:(1, 0, 0),y:(0, 1, 0),z:(0, 0, 1)]` for the identity.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x:{},y:{},z:{}]",
            self.applied_to(Vector3::UNIT_X),
            self.applied_to(Vector3::UNIT_Y),
            self.applied_to(Vector3::UNIT_Z)
        )
    }
}

impl AbsDiffEq for Transform {
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

impl RelativeEq for Transform {
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

impl UlpsEq for Transform {
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
