//! User interface module - pure presentation, no interaction.
//!
//! git-wayback is a single-shot query tool with no prompts; everything
//! here is stateless formatting over explicit arguments.

pub mod formatter;

pub use formatter::{
    display_error, display_head_tag, display_not_found, display_result, display_result_header,
    display_status,
};
