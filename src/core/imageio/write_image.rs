use crate::core::base::*;
use crate::core::error::*;

use image::*;
use std::path::Path;

fn to_byte(v: Float) -> u8 {
    Float::clamp(255.0 * gamma_correct(v) + 0.5, 0.0, 255.0) as u8
}

/// Quantizes linear RGB to gamma-corrected 8-bit values, row-major.
pub fn to_bytes(rgb: &[Float]) -> Vec<u8> {
    return rgb.iter().map(|v| to_byte(*v)).collect();
}

/// Writes interleaved linear RGB. The format follows the file extension
/// (`.png` for the renderer's own output).
pub fn write_image<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    rgb: &[Float],
) -> Result<(), TracerError> {
    let expected = 3 * width as usize * height as usize;
    if width == 0 || height == 0 || rgb.len() != expected {
        return Err(TracerError::InvalidResolution { width, height });
    }
    let img = RgbImage::from_vec(width, height, to_bytes(rgb))
        .ok_or(TracerError::InvalidResolution { width, height })?;
    img.save(path.as_ref())?;
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        assert_eq!(to_bytes(&[0.0, 1.0, 2.0, -1.0]), vec![0, 255, 255, 0]);
        let mid = to_bytes(&[0.5])[0];
        assert!(mid > 128);
    }

    #[test]
    fn test_002() {
        let err = write_image("never-written.png", 2, 2, &[0.0; 3]).unwrap_err();
        assert!(matches!(err, TracerError::InvalidResolution { width: 2, height: 2 }));
    }
}
