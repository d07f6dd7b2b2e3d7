use crate::core::base::*;
use crate::core::spectrum::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Scene-edit step applied to a renderable (and, for groups, to every member).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    Scale(Vector3f),
    Translate(Vector3f),
    /// Angle in radians.
    Rotate(Float, Axis),
    Color(Spectrum),
    Emit(bool),
    ReverseNormals,
    Reflectiveness(Float),
}

/// Right-handed rotation of `p` by `theta` radians about `axis`.
pub fn rotate_point(p: &Point3f, theta: Float, axis: Axis) -> Point3f {
    let (sin, cos) = Float::sin_cos(theta);
    match axis {
        Axis::X => Point3f::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos),
        Axis::Y => Point3f::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos),
        Axis::Z => Point3f::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z),
    }
}

/// Fluent edit helpers, available on anything that can apply an [`Operation`].
pub trait Transformable: Sized {
    fn apply(&self, op: &Operation) -> Self;

    fn scale(&self, s: &Vector3f) -> Self {
        self.apply(&Operation::Scale(*s))
    }

    fn scale_uniform(&self, factor: Float) -> Self {
        self.scale(&Vector3f::new(factor, factor, factor))
    }

    fn scale_on(&self, factor: Float, axis: Axis) -> Self {
        let s = match axis {
            Axis::X => Vector3f::new(factor, 1.0, 1.0),
            Axis::Y => Vector3f::new(1.0, factor, 1.0),
            Axis::Z => Vector3f::new(1.0, 1.0, factor),
        };
        self.scale(&s)
    }

    fn translate(&self, d: &Vector3f) -> Self {
        self.apply(&Operation::Translate(*d))
    }

    fn translate_on(&self, distance: Float, axis: Axis) -> Self {
        let d = match axis {
            Axis::X => Vector3f::new(distance, 0.0, 0.0),
            Axis::Y => Vector3f::new(0.0, distance, 0.0),
            Axis::Z => Vector3f::new(0.0, 0.0, distance),
        };
        self.translate(&d)
    }

    fn rotate(&self, theta: Float, axis: Axis) -> Self {
        self.apply(&Operation::Rotate(theta, axis))
    }

    fn color(&self, c: &Spectrum) -> Self {
        self.apply(&Operation::Color(*c))
    }

    fn emit(&self) -> Self {
        self.apply(&Operation::Emit(true))
    }

    fn reverse_normals(&self) -> Self {
        self.apply(&Operation::ReverseNormals)
    }

    fn reflectiveness(&self, r: Float) -> Self {
        self.apply(&Operation::Reflectiveness(r))
    }
}
