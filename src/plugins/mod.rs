pub mod follower;
pub mod interaction;
pub mod lifecycle;
pub mod render;
pub mod ripple;
