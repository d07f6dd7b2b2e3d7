pub mod camera;
pub mod uniforms;

pub use camera::*;
pub use uniforms::*;
