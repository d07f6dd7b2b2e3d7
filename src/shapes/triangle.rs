use super::operation::*;
use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::scene::*;

impl TriangleRecord {
    /// Unnormalized front-face normal `(v1 - v0) x (v2 - v0)`.
    #[inline]
    pub fn cross(&self) -> Vector3f {
        let p0 = self.vertex(0);
        return Vector3f::cross(&(self.vertex(1) - p0), &(self.vertex(2) - p0));
    }

    pub fn area(&self) -> Float {
        return 0.5 * self.cross().length();
    }

    pub fn world_bound(&self) -> Bounds3f {
        return Bounds3f::from_points(&[self.vertex(0), self.vertex(1), self.vertex(2)]);
    }

    /// Möller–Trumbore test. Both faces are hit; the returned normal is the
    /// front-face normal.
    pub fn intersect(&self, r: &Ray) -> Option<(Float, Normal3f)> {
        let p0 = self.vertex(0);
        let e1 = self.vertex(1) - p0;
        let e2 = self.vertex(2) - p0;

        // Degenerate triangles have no normal; never report them.
        let n = Vector3f::cross(&e1, &e2);
        if 0.5 * n.length() < DEGENERATE_AREA {
            return None;
        }

        let pvec = Vector3f::cross(&r.d, &e2);
        let det = e1.dot(&pvec);
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;

        // Barycentric coordinates (b0, b1, b2) = (1 - u - v, u, v)
        let tvec = r.o - p0;
        let u = tvec.dot(&pvec) * inv_det;
        if !in_unit_interval(u) {
            return None;
        }
        let qvec = Vector3f::cross(&tvec, &e1);
        let v = r.d.dot(&qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(&qvec) * inv_det;
        if !r.contains(t) {
            return None;
        }
        return Some((t, n.normalize()));
    }
}

/// Host-side triangle used while assembling a scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3f; 3],
    pub material: Material,
}

impl Triangle {
    pub fn new(vertices: [Point3f; 3], material: Material) -> Self {
        Triangle { vertices, material }
    }

    pub fn normal(&self) -> Normal3f {
        let e1 = self.vertices[1] - self.vertices[0];
        let e2 = self.vertices[2] - self.vertices[0];
        return Vector3f::cross(&e1, &e2).normalize();
    }

    pub fn record(&self) -> PrimitiveRecord {
        return PrimitiveRecord::from(TriangleRecord::new(&self.vertices, &self.material));
    }

    fn map_vertices<F>(&self, f: F) -> Self
    where
        F: Fn(&Point3f) -> Point3f,
    {
        Triangle {
            vertices: [
                f(&self.vertices[0]),
                f(&self.vertices[1]),
                f(&self.vertices[2]),
            ],
            material: self.material,
        }
    }
}

impl Transformable for Triangle {
    fn apply(&self, op: &Operation) -> Self {
        match op {
            Operation::Scale(s) => self.map_vertices(|p| *p * *s),
            Operation::Translate(d) => self.map_vertices(|p| *p + *d),
            Operation::Rotate(theta, axis) => {
                self.map_vertices(|p| rotate_point(p, *theta, *axis))
            }
            Operation::Color(c) => {
                let mut t = *self;
                t.material.color = *c;
                t
            }
            Operation::Emit(emits) => {
                let mut t = *self;
                t.material.emits = *emits;
                t
            }
            Operation::ReverseNormals => {
                let v = &self.vertices;
                Triangle::new([v[0], v[2], v[1]], self.material)
            }
            Operation::Reflectiveness(r) => {
                let mut t = *self;
                t.material.reflectiveness = *r;
                t
            }
        }
    }
}
