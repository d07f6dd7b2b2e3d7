pub mod accel;

pub use accel::*;
