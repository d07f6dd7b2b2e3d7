use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::scene::*;

/// Closest accepted hit along a ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceHit {
    pub t: Float,
    pub p: Point3f,
    /// Unit normal, flipped to face the incoming ray.
    pub n: Normal3f,
    /// Whether the ray struck the side the geometric normal points to.
    pub front_face: bool,
    /// Index of the record in the scene buffer.
    pub index: usize,
    pub material: Material,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Intersection {
    Hit(SurfaceHit),
    Miss,
}

impl Intersection {
    pub fn is_hit(&self) -> bool {
        return matches!(self, Intersection::Hit(_));
    }

    pub fn hit(&self) -> Option<&SurfaceHit> {
        match self {
            Intersection::Hit(h) => Some(h),
            Intersection::Miss => None,
        }
    }
}

impl<'a> Primitive<'a> {
    /// Hit distance and geometric normal, if the ray strikes this primitive
    /// inside its range.
    #[inline]
    pub fn intersect(&self, r: &Ray) -> Option<(Float, Normal3f)> {
        match self {
            Primitive::Triangle(t) => t.intersect(r),
            Primitive::Sphere(s) => s.intersect(r),
            Primitive::Unknown(_) => None,
        }
    }
}

/// Tests the ray against every record and returns the nearest hit.
///
/// Among the hits within `TIE_EPSILON` of the smallest distance, the lowest
/// record index wins, so the result does not depend on floating-point noise
/// between coplanar primitives or on the scan order.
pub fn intersect(r: &Ray, scene: &SceneBuffer) -> Intersection {
    if scene.world_bound().intersect_p(r).is_none() {
        return Intersection::Miss;
    }

    let hits: Vec<(Float, Normal3f, usize)> = scene
        .primitives()
        .enumerate()
        .filter_map(|(index, prim)| prim.intersect(r).map(|(t, n)| (t, n, index)))
        .collect();
    let t_nearest = match hits.iter().map(|h| h.0).reduce(Float::min) {
        Some(t) => t,
        None => return Intersection::Miss,
    };
    // Hits come out in index order.
    let (t, n, index) = match hits.into_iter().find(|h| h.0 <= t_nearest + TIE_EPSILON) {
        Some(v) => v,
        None => return Intersection::Miss,
    };
    let material = match scene.intersectable_at(index).and_then(|p| p.material()) {
        Some(m) => m,
        None => return Intersection::Miss,
    };
    let front_face = r.d.dot(&n) < 0.0;
    let n = if front_face { n } else { -n };
    return Intersection::Hit(SurfaceHit {
        t,
        p: r.position(t),
        n,
        front_face,
        index,
        material,
    });
}

/// Whether anything is hit inside the ray's range.
pub fn intersect_p(r: &Ray, scene: &SceneBuffer) -> bool {
    if scene.world_bound().intersect_p(r).is_none() {
        return false;
    }
    return scene.primitives().any(|prim| prim.intersect(r).is_some());
}
