pub use alignment::{Alignable, Reversed};

pub mod alignment;
pub mod num;
