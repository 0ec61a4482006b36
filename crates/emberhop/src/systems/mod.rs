pub mod animation;
pub mod character;
pub mod jump;
pub mod world;
