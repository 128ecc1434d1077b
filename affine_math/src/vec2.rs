use bytemuck::{Pod, Zeroable};

/// Pair of components used to compose the wider vector types.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2([f64; 2]);

impl Vector2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2([x, y])
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(val: [f64; 2]) -> Self {
        Vector2(val)
    }
}
