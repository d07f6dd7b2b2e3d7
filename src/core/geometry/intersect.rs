use crate::core::base::*;

/// Slab test of the segment `org + t*dir, t in [t0, t1]` against an
/// axis-aligned box. Returns whether it overlaps and the clipped range.
pub fn intersect_box(
    min: &Vector3f,
    max: &Vector3f,
    org: &Vector3f,
    dir: &Vector3f,
    mut t0: Float,
    mut t1: Float,
) -> (bool, Float, Float) {
    for i in 0..3 {
        let inv_dir = Float::recip(dir[i]);
        let mut t_near = (min[i] - org[i]) * inv_dir;
        let mut t_far = (max[i] - org[i]) * inv_dir;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }
        // NaN (origin on a slab plane with a zero direction) leaves the range alone.
        t0 = Float::max(t0, t_near);
        t1 = Float::min(t1, t_far);
        if t0 > t1 {
            return (false, t0, t1);
        }
    }
    return (true, t0, t1);
}
