use super::camera::*;

use bytemuck::{Pod, Zeroable};

/// Per-frame constants shared by every pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub width: u32,
    pub height: u32,
    /// Monotone frame counter; `0` starts a new accumulation. Keys the
    /// per-pixel sample streams and orders frames in the accumulator.
    pub frame_number: u32,
    pub camera: Camera,
}

const _: () = assert!(std::mem::size_of::<Uniforms>() == 36);

impl Uniforms {
    pub fn new(width: u32, height: u32, frame_number: u32, camera: &Camera) -> Self {
        Uniforms {
            width,
            height,
            frame_number,
            camera: *camera,
        }
    }

    pub fn pixel_count(&self) -> usize {
        return self.width as usize * self.height as usize;
    }

    pub fn as_bytes(&self) -> &[u8] {
        return bytemuck::bytes_of(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::base::*;

    #[test]
    fn test_001() {
        let camera = Camera::new(&Point3f::new(1.0, 2.0, 3.0), &Vector3f::new(4.0, 5.0, 6.0));
        let u = Uniforms::new(640, 480, 7, &camera);
        let words: &[u32] = bytemuck::cast_slice(u.as_bytes());
        assert_eq!(words.len(), 9);
        assert_eq!(words[0], 640);
        assert_eq!(words[2], 7);
        assert_eq!(f32::from_bits(words[3]), 1.0);
        assert_eq!(f32::from_bits(words[8]), 6.0);
        assert_eq!(u.pixel_count(), 640 * 480);
    }
}
