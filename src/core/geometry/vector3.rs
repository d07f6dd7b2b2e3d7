use crate::core::base::Float;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3::<T> { x, y, z }
    }

    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        return [self.x, self.y, self.z];
    }
}

impl<T: Copy + Default> Vector3<T> {
    #[inline]
    pub fn zero() -> Self {
        Vector3::<T> {
            x: T::default(),
            y: T::default(),
            z: T::default(),
        }
    }
}

impl Vector3<Float> {
    #[inline]
    pub fn dot(&self, rhs: &Self) -> Float {
        return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
    }

    #[inline]
    pub fn length_squared(&self) -> Float {
        return self.dot(self);
    }

    #[inline]
    pub fn length(&self) -> Float {
        return Float::sqrt(self.length_squared());
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let l = self.length();
        Vector3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    #[inline]
    pub fn distance(a: &Self, b: &Self) -> Float {
        return (*a - *b).length();
    }

    #[inline]
    pub fn cross(v1: &Self, v2: &Self) -> Self {
        Vector3 {
            x: (v1.y * v2.z) - (v1.z * v2.y),
            y: (v1.z * v2.x) - (v1.x * v2.z),
            z: (v1.x * v2.y) - (v1.y * v2.x),
        }
    }

    #[inline]
    pub fn abs(&self) -> Self {
        return Vector3::new(self.x.abs(), self.y.abs(), self.z.abs());
    }

    #[inline]
    pub fn min(a: &Self, b: &Self) -> Self {
        return Vector3::new(
            Float::min(a.x, b.x),
            Float::min(a.y, b.y),
            Float::min(a.z, b.z),
        );
    }

    #[inline]
    pub fn max(a: &Self, b: &Self) -> Self {
        return Vector3::new(
            Float::max(a.x, b.x),
            Float::max(a.y, b.y),
            Float::max(a.z, b.z),
        );
    }

    #[inline]
    pub fn max_component(&self) -> Float {
        return Float::max(self.x, Float::max(self.y, self.z));
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        return self.x.is_finite() && self.y.is_finite() && self.z.is_finite();
    }

    /// Mirrors `self` about the normal `n`.
    #[inline]
    pub fn reflect(&self, n: &Self) -> Self {
        return *self - *n * (2.0 * self.dot(n));
    }

    /// Builds an orthonormal basis whose first axis is `v1` (normalized).
    pub fn coordinate_system(v1: &Self) -> (Self, Self, Self) {
        let v1 = v1.normalize();
        if Float::abs(v1.x) > Float::abs(v1.y) {
            let v2 = Self::new(-v1.z, 0.0, v1.x).normalize();
            let v3 = Self::cross(&v1, &v2);
            return (v1, v2, v3);
        } else {
            let v2 = Self::new(0.0, v1.z, -v1.y).normalize();
            let v3 = Self::cross(&v1, &v2);
            return (v1, v2, v3);
        }
    }
}

// Add
impl<T: ops::Add<Output = T>> ops::Add<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        return Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        };
    }
}

// Sub
impl<T: ops::Sub<Output = T>> ops::Sub<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        return Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        };
    }
}

// V x V
impl<T: ops::Mul<Output = T>> ops::Mul<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        return Vector3 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        };
    }
}

// V x T
impl<T: ops::Mul<Output = T> + Copy> ops::Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        };
    }
}

// T x V
impl ops::Mul<Vector3<f32>> for f32 {
    type Output = Vector3<f32>;
    #[inline]
    fn mul(self, rhs: Vector3<f32>) -> Vector3<f32> {
        return rhs * self;
    }
}

impl<T: ops::Div<Output = T> + Copy> ops::Div<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn div(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        };
    }
}

impl<T: ops::Neg<Output = T>> ops::Neg for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        return Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        };
    }
}

impl<T: ops::AddAssign<T>> ops::AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: ops::MulAssign<T> + Copy> ops::MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<T> ops::Index<usize> for Vector3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl<T: Copy> From<(T, T, T)> for Vector3<T> {
    #[inline]
    fn from(value: (T, T, T)) -> Self {
        return Vector3::new(value.0, value.1, value.2);
    }
}

impl<T: Copy> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(value: [T; 3]) -> Self {
        return Vector3::new(value[0], value[1], value[2]);
    }
}

impl<T: Copy> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(value: Vector3<T>) -> Self {
        return value.to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let a = Vector3::<f32>::new(1.0, 0.0, 0.0);
        let b = Vector3::<f32>::new(0.0, 1.0, 0.0);
        assert_eq!(Vector3::cross(&a, &b), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn test_002() {
        let d = Vector3::<f32>::new(1.0, -1.0, 0.0);
        let n = Vector3::<f32>::new(0.0, 1.0, 0.0);
        assert_eq!(d.reflect(&n), Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_003() {
        let (v1, v2, v3) = Vector3::coordinate_system(&Vector3::<f32>::new(0.0, 0.0, 2.0));
        assert!((v1.length() - 1.0).abs() < 1e-6);
        assert!(v1.dot(&v2).abs() < 1e-6);
        assert!(v1.dot(&v3).abs() < 1e-6);
        assert!(v2.dot(&v3).abs() < 1e-6);
    }

    #[test]
    fn test_004() {
        let a: [f32; 3] = Vector3::new(1.0, 2.0, 3.0).into();
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::from(a)[2], 3.0);
    }
}
