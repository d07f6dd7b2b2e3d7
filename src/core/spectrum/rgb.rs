use crate::core::base::*;
use std::ops;

const YWEIGHT: [f32; 3] = [0.212671, 0.715160, 0.072169];

/// Linear RGB radiance / reflectance triple.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RGBSpectrum {
    c: [f32; 3],
}

impl RGBSpectrum {
    pub const N_SAMPLES: usize = 3;

    #[inline]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    pub const fn const_new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    #[inline]
    pub fn zero() -> Self {
        RGBSpectrum { c: [0.0, 0.0, 0.0] }
    }

    #[inline]
    pub fn one() -> Self {
        RGBSpectrum { c: [1.0, 1.0, 1.0] }
    }

    pub fn clamp(&self, low: Float, hi: Float) -> Self {
        let c = &self.c;
        return RGBSpectrum::new(
            Float::clamp(c[0], low, hi),
            Float::clamp(c[1], low, hi),
            Float::clamp(c[2], low, hi),
        );
    }

    pub fn y(&self) -> Float {
        let c = &self.c;
        return YWEIGHT[0] * c[0] + YWEIGHT[1] * c[1] + YWEIGHT[2] * c[2];
    }

    #[inline]
    pub fn to_rgb(&self) -> [Float; 3] {
        return self.c;
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|x| -> bool { x.abs() <= 0.0 });
    }

    pub fn is_valid(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|x| -> bool { x.is_finite() });
    }

    /// Whether every channel lies in `[0, 1]`.
    pub fn in_unit_range(&self) -> bool {
        return self.c.iter().all(|x| in_unit_interval(*x));
    }

    pub fn near_equal(a: &RGBSpectrum, b: &RGBSpectrum, eps: f32) -> bool {
        for i in 0..Self::N_SAMPLES {
            if Float::abs(a.c[i] - b.c[i]) > eps {
                return false;
            }
        }
        return true;
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        return &self.c[i];
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: f32) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] * s, self.c[1] * s, self.c[2] * s);
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        return rhs * self;
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn div(self, s: f32) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] / s, self.c[1] / s, self.c[2] / s);
    }
}

impl ops::Add<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn add(self, s: RGBSpectrum) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] + s.c[0], self.c[1] + s.c[1], self.c[2] + s.c[2]);
    }
}

impl ops::Sub<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn sub(self, s: RGBSpectrum) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] - s.c[0], self.c[1] - s.c[1], self.c[2] - s.c[2]);
    }
}

impl ops::Mul<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        return RGBSpectrum::new(self.c[0] * s.c[0], self.c[1] * s.c[1], self.c[2] * s.c[2]);
    }
}

impl ops::AddAssign<RGBSpectrum> for RGBSpectrum {
    #[inline]
    fn add_assign(&mut self, s: RGBSpectrum) {
        self.c[0] += s.c[0];
        self.c[1] += s.c[1];
        self.c[2] += s.c[2];
    }
}

impl ops::MulAssign<RGBSpectrum> for RGBSpectrum {
    #[inline]
    fn mul_assign(&mut self, s: RGBSpectrum) {
        self.c[0] *= s.c[0];
        self.c[1] *= s.c[1];
        self.c[2] *= s.c[2];
    }
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        RGBSpectrum::zero()
    }
}

impl From<[f32; 3]> for RGBSpectrum {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        RGBSpectrum { c: value }
    }
}

impl From<&Vector3f> for RGBSpectrum {
    #[inline]
    fn from(value: &Vector3f) -> Self {
        RGBSpectrum::new(value.x, value.y, value.z)
    }
}
