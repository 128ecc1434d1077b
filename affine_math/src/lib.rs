//! Immutable 4x4 affine transforms and the 3D/4D vectors they act on.
//!
//! Transforms are built from the named constructors on [`Transform`]
//! (translation, rotations, scale, look-at), composed with `*` and applied
//! to points with [`Transform::applied_to`]. Nothing is mutated in place.

pub mod error;
mod primitives;
pub mod transform;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use self::error::{Result, TransformError};
pub use self::transform::{Column, Row, Transform};
pub use self::vec2::Vector2;
pub use self::vec3::Vector3;
pub use self::vec4::Vector4;
