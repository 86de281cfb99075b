pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod wayback;

pub use error::{Result, WaybackError};
pub use wayback::{current_tag, Selection, Wayback};
