use super::constants::*;
use super::types::*;

#[inline]
pub fn lerp(t: Float, v1: Float, v2: Float) -> Float {
    return (1.0 - t) * v1 + t * v2;
}

#[inline]
pub fn radians(deg: Float) -> Float {
    return (PI / 180.0) * deg;
}

#[inline]
pub fn degrees(rad: Float) -> Float {
    return (180.0 / PI) * rad;
}

#[inline]
pub fn gamma_correct(value: Float) -> Float {
    if value <= 0.0031308 {
        return 12.92 * value;
    } else {
        return 1.055 * Float::powf(value, 1.0 / 2.4) - 0.055;
    }
}

/// Solves `a*t^2 + b*t + c = 0`, returning the roots in ascending order.
///
/// Evaluated in double precision with the numerically stable form of the
/// quadratic formula.
#[inline]
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let a = a as f64;
    let b = b as f64;
    let c = c as f64;
    if a == 0.0 {
        return None;
    }
    // Find quadratic discriminant
    let discrim: f64 = b * b - 4.0 * a * c;
    if discrim < 0.0 {
        return None;
    }
    let root_discrim = f64::sqrt(discrim);
    // Compute quadratic _t_ values
    let q = if b < 0.0 {
        -0.5 * (b - root_discrim)
    } else {
        -0.5 * (b + root_discrim)
    };
    let mut t0 = q / a;
    let mut t1 = if q != 0.0 { c / q } else { t0 };
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    return Some((t0 as Float, t1 as Float));
}

#[inline]
pub fn in_unit_interval(v: Float) -> bool {
    return (0.0..=1.0).contains(&v);
}
