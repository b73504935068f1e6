pub use engine::{Engine, Slot};
pub use stitch::{extend, mirror_index, stitch};

mod engine;
mod stitch;
