pub mod args;
pub mod list;
pub mod render;
