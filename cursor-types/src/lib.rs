mod ripple;
mod settings;
mod spring;
mod state;
mod visual;

pub use ripple::*;
pub use settings::*;
pub use spring::*;
pub use state::*;
pub use visual::*;
