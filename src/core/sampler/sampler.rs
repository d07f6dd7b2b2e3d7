use crate::core::base::*;
use crate::core::rng::*;

/// Stream id reserved for the camera ray's sub-pixel jitter; bounces use
/// their own index.
const CAMERA_STREAM: u64 = u64::MAX;

/// Deterministic sample source for one pixel of one frame.
///
/// Every draw is a pure function of (pixel, frame number, bounce index):
/// replaying a frame reproduces its samples bit for bit, while successive
/// frames land on unrelated PCG32 sequences.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PathSampler {
    pub pixel: Point2i,
    pub frame_number: u32,
}

impl PathSampler {
    pub fn new(pixel: &Point2i, frame_number: u32) -> Self {
        PathSampler {
            pixel: *pixel,
            frame_number,
        }
    }

    fn stream(&self, stream: u64) -> BounceSampler {
        let seed = mix_seed(&[
            self.pixel.x as u32 as u64,
            self.pixel.y as u32 as u64,
            self.frame_number as u64,
            stream,
        ]);
        BounceSampler {
            rng: RNG::new_sequence(seed),
        }
    }

    /// Sampler for the camera ray (sub-pixel offset).
    pub fn camera(&self) -> BounceSampler {
        return self.stream(CAMERA_STREAM);
    }

    /// Fresh sampler for the given bounce of the path.
    pub fn bounce(&self, bounce: u32) -> BounceSampler {
        return self.stream(bounce as u64);
    }
}

/// Samples consumed by a single bounce.
#[derive(Debug, Clone)]
pub struct BounceSampler {
    rng: RNG,
}

impl BounceSampler {
    pub fn get_1d(&mut self) -> Float {
        return self.rng.uniform_float();
    }

    pub fn get_2d(&mut self) -> Point2f {
        let x = self.rng.uniform_float();
        let y = self.rng.uniform_float();
        return Point2f::new(x, y);
    }
}
