use crate::core::base::*;

/// A ray with its valid parametric range `(t_min, t_max)`.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
    pub t_min: Float,
    pub t_max: Float,
}

impl Ray {
    /// Creates a ray over `(RAY_EPSILON, inf)`. `d` is expected to be unit length.
    pub fn new(o: &Point3f, d: &Vector3f) -> Self {
        Ray {
            o: *o,
            d: *d,
            t_min: RAY_EPSILON,
            t_max: Float::INFINITY,
        }
    }

    pub fn with_range(o: &Point3f, d: &Vector3f, t_min: Float, t_max: Float) -> Self {
        Ray {
            o: *o,
            d: *d,
            t_min,
            t_max,
        }
    }

    pub fn position(&self, t: Float) -> Point3f {
        return self.o + self.d * t;
    }

    /// Whether `t` lies strictly inside the valid range.
    #[inline]
    pub fn contains(&self, t: Float) -> bool {
        return t > self.t_min && t < self.t_max;
    }

    /// A follow-up ray leaving `p` along `d`, sharing this ray's lower bound.
    pub fn spawn(&self, p: &Point3f, d: &Vector3f) -> Self {
        Ray::with_range(p, d, self.t_min, Float::INFINITY)
    }
}
