pub mod animation;
pub mod preset;
pub mod sheet;
