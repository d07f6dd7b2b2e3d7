pub mod frame_stats;
pub mod render_loop;

pub use frame_stats::*;
pub use render_loop::*;
