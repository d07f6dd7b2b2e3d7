use crate::integrators::*;

use std::fmt;

/// Per-frame path counters, for diagnostics only.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FrameStats {
    pub frame_number: u32,
    pub pixels: usize,
    pub emitted: usize,
    pub escaped: usize,
    pub depth_exhausted: usize,
    /// Samples replaced by black because they were not finite.
    pub rejected: usize,
    /// Scattering events over all paths.
    pub bounces: u64,
}

impl FrameStats {
    pub fn new(frame_number: u32) -> Self {
        FrameStats {
            frame_number,
            ..Default::default()
        }
    }

    pub fn record(&mut self, sample: &PathSample) {
        self.pixels += 1;
        self.bounces += sample.bounces as u64;
        match sample.termination {
            Termination::Emitted => self.emitted += 1,
            Termination::Escaped => self.escaped += 1,
            Termination::DepthExhausted => self.depth_exhausted += 1,
        }
    }

    pub fn merge(&self, other: &FrameStats) -> FrameStats {
        FrameStats {
            frame_number: self.frame_number,
            pixels: self.pixels + other.pixels,
            emitted: self.emitted + other.emitted,
            escaped: self.escaped + other.escaped,
            depth_exhausted: self.depth_exhausted + other.depth_exhausted,
            rejected: self.rejected + other.rejected,
            bounces: self.bounces + other.bounces,
        }
    }

    pub fn mean_path_length(&self) -> f64 {
        if self.pixels == 0 {
            return 0.0;
        }
        return self.bounces as f64 / self.pixels as f64;
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {}: {} paths, {} emitted, {} escaped, {} depth-exhausted, {} rejected, {:.2} bounces/path",
            self.frame_number,
            self.pixels,
            self.emitted,
            self.escaped,
            self.depth_exhausted,
            self.rejected,
            self.mean_path_length()
        )
    }
}
