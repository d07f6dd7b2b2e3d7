use crate::core::base::*;
use crate::core::geometry::*;

use bytemuck::{Pod, Zeroable};

/// Pinhole camera looking down `+z` in world space, with `+y` up and `+x`
/// to the right.
///
/// `frustrum` holds the image-plane half-width, half-height and distance:
/// the top-left corner of the image maps to the direction
/// `(-frustrum.x, frustrum.y, frustrum.z)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Camera {
    pub position: [f32; 3],
    pub frustrum: [f32; 3],
}

/// Point on the film in raster space: pixel coordinates plus a sub-pixel
/// offset, `(0, 0)` being the top-left corner of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSample {
    pub p_film: Point2f,
}

impl CameraSample {
    pub fn new(pixel: &Point2i, offset: &Point2f) -> Self {
        CameraSample {
            p_film: Point2f::new(pixel.x as Float + offset.x, pixel.y as Float + offset.y),
        }
    }
}

impl Camera {
    pub fn new(position: &Point3f, frustrum: &Vector3f) -> Self {
        Camera {
            position: position.to_array(),
            frustrum: frustrum.to_array(),
        }
    }

    /// Frustum for a vertical field of view, widened by the image aspect
    /// ratio.
    pub fn from_field_of_view(position: &Point3f, fov: Float, width: u32, height: u32) -> Self {
        let half_height = Float::tan(radians(fov) * 0.5);
        let aspect = if height > 0 {
            width as Float / height as Float
        } else {
            1.0
        };
        return Self::new(position, &Vector3f::new(half_height * aspect, half_height, 1.0));
    }

    pub fn position(&self) -> Point3f {
        return Point3f::from(self.position);
    }

    pub fn frustrum(&self) -> Vector3f {
        return Vector3f::from(self.frustrum);
    }

    pub fn generate_ray(&self, sample: &CameraSample, width: u32, height: u32) -> Ray {
        // Raster to [-1, 1] screen space, y pointing up
        let u = 2.0 * sample.p_film.x / width as Float - 1.0;
        let v = 1.0 - 2.0 * sample.p_film.y / height as Float;
        let f = self.frustrum();
        let d = Vector3f::new(u * f.x, v * f.y, f.z).normalize();
        return Ray::new(&self.position(), &d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        assert_eq!(std::mem::size_of::<Camera>(), 24);
        let camera = Camera::new(&Point3f::new(1.0, 2.0, 3.0), &Vector3f::new(1.0, 1.0, 1.0));
        let center = CameraSample {
            p_film: Point2f::new(50.0, 25.0),
        };
        let ray = camera.generate_ray(&center, 100, 50);
        assert_eq!(ray.o, Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(ray.d, Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_002() {
        let camera = Camera::new(&Point3f::zero(), &Vector3f::new(1.0, 1.0, 1.0));
        let top_left = CameraSample::new(&Point2i::new(0, 0), &Point2f::new(0.0, 0.0));
        let d = camera.generate_ray(&top_left, 10, 10).d;
        assert!(d.x < 0.0 && d.y > 0.0 && d.z > 0.0);
        assert!((d.x + d.y).abs() < 1e-6);
    }

    #[test]
    fn test_003() {
        let camera = Camera::from_field_of_view(&Point3f::zero(), 90.0, 200, 100);
        let f = camera.frustrum();
        assert!((f.y - 1.0).abs() < 1e-5);
        assert!((f.x - 2.0).abs() < 1e-5);
        assert_eq!(f.z, 1.0);
    }
}
