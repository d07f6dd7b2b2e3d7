pub mod record;
pub mod scene_buffer;

pub use record::*;
pub use scene_buffer::*;
