pub mod animation;
pub mod character;
pub mod decoration;
pub mod entity;
pub mod ground;
pub mod hazard;
pub mod layer;
