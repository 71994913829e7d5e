pub mod stage1_plurals;
pub mod stage2_direction;
pub mod stage3_multi_input;
pub mod stage4_capitalization;
pub mod stage5_token_routing;

pub use stage1_plurals::*;
pub use stage2_direction::*;
pub use stage3_multi_input::*;
pub use stage4_capitalization::*;
pub use stage5_token_routing::*;
