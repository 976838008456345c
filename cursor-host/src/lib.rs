pub mod input_bridge;
pub mod overlay;

pub use input_bridge::*;
pub use overlay::*;
