use super::intersect::*;
use super::ray::Ray;
use super::vector3::Vector3;
use crate::core::base::*;

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Bounds3<T> {
    pub min: Vector3<T>,
    pub max: Vector3<T>,
}

impl Bounds3<Float> {
    pub fn new(min: &Vector3f, max: &Vector3f) -> Self {
        Bounds3 {
            min: *min,
            max: *max,
        }
    }

    /// The empty box: unioning anything into it yields that thing.
    pub fn empty() -> Self {
        Bounds3 {
            min: Vector3f::new(Float::INFINITY, Float::INFINITY, Float::INFINITY),
            max: Vector3f::new(
                Float::NEG_INFINITY,
                Float::NEG_INFINITY,
                Float::NEG_INFINITY,
            ),
        }
    }

    pub fn from_points(points: &[Point3f]) -> Self {
        return points
            .iter()
            .fold(Self::empty(), |b, p| -> Self { b.union_point(p) });
    }

    pub fn is_empty(&self) -> bool {
        return self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z;
    }

    pub fn union_point(&self, p: &Point3f) -> Self {
        return Bounds3::new(&Vector3f::min(&self.min, p), &Vector3f::max(&self.max, p));
    }

    pub fn union(&self, b: &Self) -> Self {
        return Bounds3::new(
            &Vector3f::min(&self.min, &b.min),
            &Vector3f::max(&self.max, &b.max),
        );
    }

    pub fn inside(&self, p: &Point3f) -> bool {
        return p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z;
    }

    /// Slab test against the ray's parametric range.
    pub fn intersect_p(&self, ray: &Ray) -> Option<(Float, Float)> {
        if self.is_empty() {
            return None;
        }
        let (b, t0, t1) = intersect_box(
            &self.min, &self.max, &ray.o, &ray.d, ray.t_min, ray.t_max,
        );
        if b {
            return Some((t0, t1));
        } else {
            return None;
        }
    }
}

impl Default for Bounds3<Float> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let b = Bounds3f::from_points(&[
            Point3f::new(-1.0, 0.0, 2.0),
            Point3f::new(1.0, 3.0, -2.0),
        ]);
        assert_eq!(b.min, Point3f::new(-1.0, 0.0, -2.0));
        assert_eq!(b.max, Point3f::new(1.0, 3.0, 2.0));
        assert!(b.inside(&Point3f::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_002() {
        let b = Bounds3f::new(&Point3f::new(-1.0, -1.0, -1.0), &Point3f::new(1.0, 1.0, 1.0));
        let hit = Ray::new(&Point3f::new(0.0, 0.0, -5.0), &Vector3f::new(0.0, 0.0, 1.0));
        let (t0, t1) = b.intersect_p(&hit).unwrap();
        assert!((t0 - 4.0).abs() < 1e-5);
        assert!((t1 - 6.0).abs() < 1e-5);

        let miss = Ray::new(&Point3f::new(0.0, 3.0, -5.0), &Vector3f::new(0.0, 0.0, 1.0));
        assert!(b.intersect_p(&miss).is_none());
    }

    #[test]
    fn test_003() {
        assert!(Bounds3f::empty().is_empty());
        let ray = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0));
        assert!(Bounds3f::empty().intersect_p(&ray).is_none());
    }
}
