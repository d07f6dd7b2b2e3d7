pub mod exhaustive;

pub use exhaustive::*;
