/// Raster positions (`Point2i`) and film or sample coordinates (`Point2f`).
#[derive(Debug, PartialEq, Eq, Default, Copy, Clone, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy + Default> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Vector2::<T> { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::default(), T::default())
    }
}
