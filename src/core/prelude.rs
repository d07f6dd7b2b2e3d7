pub use crate::core::base::*;
pub use crate::core::camera::*;
pub use crate::core::error::*;
pub use crate::core::film::*;
pub use crate::core::geometry::*;
pub use crate::core::imageio::*;
pub use crate::core::integrator::*;
pub use crate::core::options::*;
pub use crate::core::rng::*;
pub use crate::core::sampler::*;
pub use crate::core::sampling::*;
pub use crate::core::scene::*;
pub use crate::core::spectrum::*;
