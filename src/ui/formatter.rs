//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from selection. Functions are
//! stateless and take explicit arguments, no shared configuration.

use console::style;

use crate::domain::{Cutoff, LAYOUT};
use crate::git::CommitMeta;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the column header for selection results.
pub fn display_result_header() {
    println!(
        "{:<8} {:<12} {:<12} {}",
        style("Type").bold(),
        style("Hash").bold(),
        style("Tag").bold(),
        style("Commit Time").bold()
    );
}

/// Print one selection result row.
///
/// `label` names the policy ("Tagged" or "Untagged"); the hash is
/// shortened to 12 characters the way git log does.
pub fn display_result(label: &str, commit: &CommitMeta, tag: Option<&str>) {
    println!(
        "{:<8} {:<12.12} {:<12} {}",
        label,
        commit.id.to_string(),
        tag.unwrap_or(""),
        commit.when.format(LAYOUT)
    );
}

/// Report that a policy found nothing before the cutoff.
pub fn display_not_found(label: &str, cutoff: &Cutoff) {
    println!(
        "{:<8} {}",
        label,
        style(format!("no candidate before {}", cutoff)).dim()
    );
}

/// Report the tag currently pointing at HEAD.
pub fn display_head_tag(tag: &str) {
    println!("HEAD is at tag {}", style(tag).green());
}

/// Header for the per-candidate debug trace.
pub fn display_scan_header(kind: &str, cutoff: &Cutoff) {
    println!("Searching for {} before {}", kind, cutoff);
    println!("{:<12} {:<32} {:<12}", "Hash", "Commit Time", "Tag");
}

/// One row of the per-candidate debug trace.
pub fn display_scan_row(commit: &CommitMeta, tag: Option<&str>) {
    println!(
        "{:<12.12} {:<32} {:<12}",
        commit.id.to_string(),
        commit.when.format(LAYOUT).to_string(),
        tag.unwrap_or("")
    );
}
