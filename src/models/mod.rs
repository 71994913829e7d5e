pub mod group;
pub mod leaf;
pub mod rule;

pub use group::*;
pub use leaf::*;
pub use rule::*;
