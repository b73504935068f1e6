pub mod alignment;
pub mod global;
pub mod matrix;
pub mod scoring;
