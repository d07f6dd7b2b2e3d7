use super::operation::*;
use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::scene::*;

impl SphereRecord {
    pub fn world_bound(&self) -> Bounds3f {
        let c = self.center();
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        return Bounds3f::new(&(c - r), &(c + r));
    }

    /// Returns the nearest root of `|o + t*d - center|^2 = radius^2` inside
    /// the ray's range, with the outward normal at that point.
    pub fn intersect(&self, r: &Ray) -> Option<(Float, Normal3f)> {
        let center = self.center();
        let oc = r.o - center;

        // Compute quadratic sphere coefficients
        let a = r.d.length_squared();
        let b = 2.0 * r.d.dot(&oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // Solve quadratic equation for _t_ values
        let (t0, t1) = quadratic(a, b, c)?;
        if t0 >= r.t_max || t1 <= r.t_min {
            return None;
        }
        let t_hit = if r.contains(t0) {
            t0
        } else if r.contains(t1) {
            t1
        } else {
            return None;
        };

        let n = (r.position(t_hit) - center) / self.radius;
        return Some((t_hit, n.normalize()));
    }
}

/// Host-side sphere used while assembling a scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: Float,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point3f, radius: Float, material: Material) -> Self {
        Sphere {
            center,
            radius,
            material,
        }
    }

    pub fn record(&self) -> PrimitiveRecord {
        return PrimitiveRecord::from(SphereRecord::new(
            &self.center,
            self.radius,
            &self.material,
        ));
    }
}

impl Transformable for Sphere {
    fn apply(&self, op: &Operation) -> Self {
        let mut s = *self;
        match op {
            Operation::Scale(v) => {
                // A sphere stays a sphere: the radius follows the largest factor.
                s.center = self.center * *v;
                s.radius = self.radius * v.abs().max_component();
            }
            Operation::Translate(d) => {
                s.center = self.center + *d;
            }
            Operation::Rotate(theta, axis) => {
                s.center = rotate_point(&self.center, *theta, *axis);
            }
            Operation::Color(c) => {
                s.material.color = *c;
            }
            Operation::Emit(emits) => {
                s.material.emits = *emits;
            }
            Operation::ReverseNormals => {}
            Operation::Reflectiveness(r) => {
                s.material.reflectiveness = *r;
            }
        }
        return s;
    }
}
