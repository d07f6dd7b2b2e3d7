pub mod accelerators;
pub mod core;
pub mod integrators;
pub mod scenes;
pub mod shapes;
