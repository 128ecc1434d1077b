use crate::{Transform, Vector3};

#[rustfmt::skip]
impl Transform {
    pub const IDENTITY: Transform = Transform::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    #[inline]
    pub fn identity() -> Transform {
        Self::IDENTITY
    }

    #[inline]
    pub fn zero() -> Transform {
        Transform::from_row_major(&[0.0; 16])
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Transform {
        Transform::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            x, y, z, 1.0,
        )
    }

    pub fn translation_by(t: Vector3) -> Transform {
        Self::translation(t.x(), t.y(), t.z())
    }

    pub fn rotation_x(theta: f64) -> Transform {
        let (s, c) = theta.sin_cos();
        Transform::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, s, 0.0,
            0.0, -s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rotation_y(theta: f64) -> Transform {
        let (s, c) = theta.sin_cos();
        Transform::new(
            c, 0.0, -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rotation_z(theta: f64) -> Transform {
        let (s, c) = theta.sin_cos();
        Transform::new(
            c, s, 0.0, 0.0,
            -s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn uniform_scale(s: f64) -> Transform {
        Self::scale(s, s, s)
    }

    pub fn scale(x: f64, y: f64, z: f64) -> Transform {
        Transform::new(
            x, 0.0, 0.0, 0.0,
            0.0, y, 0.0, 0.0,
            0.0, 0.0, z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn scale_by(s: Vector3) -> Transform {
        Self::scale(s.x(), s.y(), s.z())
    }

    /// Places a frame at `from` whose local +X axis points towards `target`.
    ///
    /// World +Z is the reference up direction: local +Y is `up x forward`
    /// and local +Z is `forward x right`, both normalized. When `forward` is
    /// parallel (or too close to parallel to
    /// normalize against) world +Z the reference falls back to world +X.
    ///
    /// If `target == from` there is no direction to look along and a pure
    /// translation to `from` is returned.
    pub fn look_at(target: Vector3, from: Vector3) -> Transform {
        if target == from {
            log::trace!("look_at target coincides with {from}, using a plain translation");
            return Self::translation_by(from);
        }

        let forward = (target - from).unit();
        // Normalize before the zero check: a nearly vertical forward gives a
        // cross product whose squared length underflows to zero.
        let mut right = Vector3::UNIT_Z.cross(forward).unit();
        if right.is_zero() {
            log::trace!("look_at direction {forward} is vertical, using +X as reference");
            right = Vector3::UNIT_X.cross(forward).unit();
        }
        let up = forward.cross(right);

        Transform::new(
            forward.x(), forward.y(), forward.z(), 0.0,
            right.x(), right.y(), right.z(), 0.0,
            up.x(), up.y(), up.z(), 0.0,
            from.x(), from.y(), from.z(), 1.0,
        )
    }
}
