use crate::core::base::*;

use thiserror::Error;

/// The invariant a primitive record broke at scene-load time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("sphere radius must be positive and finite, got {0}")]
    NonPositiveRadius(Float),

    #[error("color channel {channel} is {value}, expected a value in [0, 1]")]
    ColorOutOfRange { channel: usize, value: Float },

    #[error("reflectiveness is {0}, expected a value in [0, 1]")]
    ReflectivenessOutOfRange(Float),

    #[error("{what} has a non-finite component")]
    NonFinite { what: &'static str },

    #[error("emits flag must be 0 or 1, got {0}")]
    InvalidEmitsFlag(i32),
}

/// Scene construction failed; no part of the scene was installed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("primitive {index}: {violation}")]
pub struct SceneLoadError {
    pub index: usize,
    pub violation: InvariantViolation,
}

/// Non-fatal: a triangle too thin to have a normal. It is kept in the buffer
/// but never reported as a hit.
#[derive(Debug, Clone, PartialEq)]
pub struct DegenerateGeometryWarning {
    pub index: usize,
    pub area: Float,
}

impl std::fmt::Display for DegenerateGeometryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "primitive {}: degenerate triangle (area {:e}) is skipped during intersection",
            self.index, self.area
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccumulationError {
    #[error("frame {frame_number} arrived at pixel ({x}, {y}) after frame {last_frame}", x = .pixel.x, y = .pixel.y)]
    OutOfOrder {
        pixel: Point2i,
        frame_number: u32,
        last_frame: u32,
    },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} accumulation buffer", x = .pixel.x, y = .pixel.y)]
    PixelOutOfBounds {
        pixel: Point2i,
        width: u32,
        height: u32,
    },

    #[error("frame carries {got} samples, expected {expected}")]
    SampleCountMismatch { expected: usize, got: usize },
}

/// Failure decoding a flat host/device buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("buffer of {len} bytes is not a multiple of the {stride}-byte record stride")]
    BadLength { len: usize, stride: usize },
}

#[derive(Error, Debug)]
pub enum TracerError {
    #[error(transparent)]
    SceneLoad(#[from] SceneLoadError),

    #[error(transparent)]
    Accumulation(#[from] AccumulationError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("frame {0} was cancelled before it was committed")]
    Cancelled(u32),

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("unknown scene '{0}'")]
    UnknownScene(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
