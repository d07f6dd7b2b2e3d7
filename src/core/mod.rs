pub mod base;
pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod imageio;
pub mod integrator;
pub mod misc;
pub mod options;
pub mod prelude;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod scene;
pub mod spectrum;
