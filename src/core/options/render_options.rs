use crate::core::base::*;
use crate::core::error::*;
use crate::core::film::*;
use crate::core::spectrum::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Renderer settings, loadable from JSON. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Surface interactions a path may have before it is truncated.
    pub max_depth: u32,
    /// Lower bound of every ray's range; keeps bounces off their own surface.
    pub t_min: Float,
    /// Radiance of rays that leave the scene.
    pub background: [Float; 3],
    pub out_of_order: OutOfOrderPolicy,
    /// Sub-pixel jitter of camera rays. Without it every frame samples the
    /// pixel centre.
    pub jitter: bool,
    /// Vertical field of view in degrees, used by the built-in scenes.
    pub field_of_view: Float,
    /// Frames to render before stopping.
    pub frames: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_depth: 5,
            t_min: RAY_EPSILON,
            background: [0.0; 3],
            out_of_order: OutOfOrderPolicy::Reject,
            jitter: true,
            field_of_view: 45.0,
            frames: 16,
        }
    }
}

impl RenderOptions {
    pub fn from_json_str(s: &str) -> Result<Self, TracerError> {
        let options: RenderOptions = serde_json::from_str(s)?;
        return Ok(options);
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TracerError> {
        let s = std::fs::read_to_string(path)?;
        return Self::from_json_str(&s);
    }

    pub fn background(&self) -> Spectrum {
        return Spectrum::from(self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let options = RenderOptions::from_json_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert_eq!(options.max_depth, 5);
        assert!(options.background().is_black());
    }

    #[test]
    fn test_002() {
        let options = RenderOptions::from_json_str(
            r#"{"max_depth": 2, "out_of_order": "reset", "background": [0.5, 0.25, 0.0]}"#,
        )
        .unwrap();
        assert_eq!(options.max_depth, 2);
        assert_eq!(options.out_of_order, OutOfOrderPolicy::Reset);
        assert_eq!(options.background(), Spectrum::new(0.5, 0.25, 0.0));
        assert!(options.jitter);
    }

    #[test]
    fn test_003() {
        let err = RenderOptions::from_json_str(r#"{"out_of_order": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, TracerError::Json(_)));
    }
}
