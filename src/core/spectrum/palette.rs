//! Named albedos used by the built-in scenes.

use super::rgb::RGBSpectrum;

pub const BLACK: RGBSpectrum = RGBSpectrum::const_new(0.0, 0.0, 0.0);
pub const GREY: RGBSpectrum = RGBSpectrum::const_new(0.5, 0.5, 0.5);
pub const WHITE: RGBSpectrum = RGBSpectrum::const_new(1.0, 1.0, 1.0);
pub const RED: RGBSpectrum = RGBSpectrum::const_new(0.85, 0.31, 0.25);
pub const ORANGE: RGBSpectrum = RGBSpectrum::const_new(0.93, 0.46, 0.18);
pub const YELLOW: RGBSpectrum = RGBSpectrum::const_new(0.95, 0.75, 0.26);
pub const GREEN: RGBSpectrum = RGBSpectrum::const_new(0.35, 0.65, 0.36);
pub const TEAL: RGBSpectrum = RGBSpectrum::const_new(0.41, 0.73, 0.77);
pub const BLUE: RGBSpectrum = RGBSpectrum::const_new(0.33, 0.51, 0.93);
pub const MAGENTA: RGBSpectrum = RGBSpectrum::const_new(1.0, 0.0, 1.0);
