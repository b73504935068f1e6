//! Global alignment of reads against a candidate consensus with forward/reverse score matrices,
//! used to score single-position edits of the candidate without re-running the full alignment.

pub use polisher_core_rs::num::Float as Score;
pub use polisher_core_rs::{Alignable, Reversed};

pub mod diagnostics;
pub mod incremental;
pub mod pairwise;
