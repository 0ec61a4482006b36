pub mod motion;
pub mod time;
