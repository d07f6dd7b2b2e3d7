use crate::core::base::*;
use crate::core::error::*;
use crate::core::spectrum::*;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// What to do when a pixel receives a frame number that does not advance
/// its history.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfOrderPolicy {
    /// Refuse the sample and report [`AccumulationError::OutOfOrder`].
    #[default]
    Reject,
    /// Drop the pixel's history and restart from the sample.
    Reset,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
struct Pixel {
    estimate: Spectrum,
    last_frame: Option<u32>,
    samples: u32,
}

/// Outcome of checking a frame number against a pixel's history.
enum Step {
    Restart,
    Blend,
}

impl Pixel {
    fn step(
        &self,
        policy: OutOfOrderPolicy,
        p: &Point2i,
        frame_number: u32,
    ) -> Result<Step, AccumulationError> {
        if frame_number == 0 {
            return Ok(Step::Restart);
        }
        match self.last_frame {
            None => Ok(Step::Restart),
            Some(last_frame) if frame_number > last_frame => Ok(Step::Blend),
            Some(last_frame) => match policy {
                OutOfOrderPolicy::Reject => Err(AccumulationError::OutOfOrder {
                    pixel: *p,
                    frame_number,
                    last_frame,
                }),
                OutOfOrderPolicy::Reset => Ok(Step::Restart),
            },
        }
    }

    fn apply(&mut self, step: Step, sample: &Spectrum, frame_number: u32) -> Spectrum {
        match step {
            Step::Restart => {
                self.estimate = *sample;
                self.samples = 1;
            }
            Step::Blend => {
                let w = 1.0 / (self.samples as Float + 1.0);
                self.estimate += (*sample - self.estimate) * w;
                self.samples += 1;
            }
        }
        self.last_frame = Some(frame_number);
        return self.estimate;
    }
}

/// Per-pixel running mean of radiance samples across frames.
///
/// Each pixel counts the samples folded in since its last restart and
/// blends the next one with weight `1 / (count + 1)`, so its estimate is
/// the arithmetic mean of those samples. For frames `0..=n` fed in order
/// the weight of frame `n` is `1 / (n + 1)`. Frame `0` discards any
/// history, as does the first frame after a reset.
#[derive(Debug, Clone)]
pub struct FrameAccumulator {
    width: u32,
    height: u32,
    policy: OutOfOrderPolicy,
    pixels: Vec<Pixel>,
}

impl FrameAccumulator {
    pub fn new(width: u32, height: u32, policy: OutOfOrderPolicy) -> Self {
        let n = width as usize * height as usize;
        FrameAccumulator {
            width,
            height,
            policy,
            pixels: vec![Pixel::default(); n],
        }
    }

    pub fn width(&self) -> u32 {
        return self.width;
    }

    pub fn height(&self) -> u32 {
        return self.height;
    }

    pub fn policy(&self) -> OutOfOrderPolicy {
        return self.policy;
    }

    fn offset(&self, p: &Point2i) -> Result<usize, AccumulationError> {
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.width || p.y as u32 >= self.height {
            return Err(AccumulationError::PixelOutOfBounds {
                pixel: *p,
                width: self.width,
                height: self.height,
            });
        }
        return Ok(p.y as usize * self.width as usize + p.x as usize);
    }

    /// Folds one sample into a single pixel and returns its new estimate.
    pub fn accumulate(
        &mut self,
        p: &Point2i,
        sample: &Spectrum,
        frame_number: u32,
    ) -> Result<Spectrum, AccumulationError> {
        let offset = self.offset(p)?;
        let pixel = &mut self.pixels[offset];
        let step = pixel.step(self.policy, p, frame_number)?;
        return Ok(pixel.apply(step, sample, frame_number));
    }

    /// Folds a whole frame of row-major samples in one step.
    ///
    /// Every pixel is checked before any is written: on error the
    /// accumulator is left exactly as it was.
    pub fn accumulate_frame(
        &mut self,
        samples: &[Spectrum],
        frame_number: u32,
    ) -> Result<(), AccumulationError> {
        if samples.len() != self.pixels.len() {
            return Err(AccumulationError::SampleCountMismatch {
                expected: self.pixels.len(),
                got: samples.len(),
            });
        }
        let width = self.width as usize;
        let policy = self.policy;
        let steps = self
            .pixels
            .par_iter()
            .enumerate()
            .map(|(i, pixel)| {
                let p = Point2i::new((i % width) as i32, (i / width) as i32);
                pixel.step(policy, &p, frame_number)
            })
            .collect::<Result<Vec<Step>, AccumulationError>>()?;
        self.pixels
            .par_iter_mut()
            .zip(steps.into_par_iter())
            .zip(samples.par_iter())
            .for_each(|((pixel, step), sample)| {
                pixel.apply(step, sample, frame_number);
            });
        return Ok(());
    }

    /// Clears every pixel's history.
    pub fn reset(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = Pixel::default());
    }

    /// Clears history and changes the resolution.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Pixel::default(); width as usize * height as usize];
    }

    pub fn estimate(&self, p: &Point2i) -> Option<Spectrum> {
        let offset = self.offset(p).ok()?;
        return Some(self.pixels[offset].estimate);
    }

    /// Current estimates, row-major.
    pub fn estimates(&self) -> Vec<Spectrum> {
        return self.pixels.iter().map(|p| p.estimate).collect();
    }

    /// Current estimates as interleaved RGB, row-major.
    pub fn to_rgb(&self) -> Vec<Float> {
        return self.pixels.iter().flat_map(|p| p.estimate.to_rgb()).collect();
    }
}
