pub mod cube;
pub mod group;
pub mod operation;
pub mod sphere;
pub mod triangle;

pub use cube::*;
pub use group::*;
pub use operation::*;
pub use sphere::*;
pub use triangle::*;
