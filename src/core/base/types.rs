use crate::core::geometry::*;

/// Scalar type of every value that crosses the host/device boundary.
///
/// The binary layout of the scene buffer and the uniforms is pinned to
/// 32-bit floats, so unlike a general renderer this alias is not switchable.
pub type Float = f32;

pub type Point2i = Vector2<i32>;
pub type Point2f = Vector2<Float>;

pub type Vector3f = Vector3<Float>;
pub type Point3f = Vector3<Float>;
pub type Normal3f = Vector3<Float>;

pub type Bounds3f = Bounds3<Float>;
