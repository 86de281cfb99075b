//! Domain logic - pure data types independent of git operations

pub mod cutoff;
pub mod tag;

pub use cutoff::{Cutoff, LAYOUT};
pub use tag::TagInfo;
