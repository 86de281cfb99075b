use chrono::{DateTime, FixedOffset};
use git2::Oid;

/// A tag paired with its resolved target commit time.
///
/// Built transiently during tag selection: a tag has no timestamp of its
/// own, so its effective time is the committer time of the commit it
/// points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    pub target: Oid,
    pub when: DateTime<FixedOffset>,
}

impl TagInfo {
    pub fn new(name: impl Into<String>, target: Oid, when: DateTime<FixedOffset>) -> Self {
        TagInfo {
            name: name.into(),
            target,
            when,
        }
    }
}

/// Sort tags most-recent-first.
///
/// Tags sharing the exact same commit time are ordered lexicographically
/// by name, so selection among equal timestamps does not depend on the
/// repository's enumeration order.
pub fn sort_newest_first(tags: &mut [TagInfo]) {
    tags.sort_by(|a, b| b.when.cmp(&a.when).then_with(|| a.name.cmp(&b.name)));
}
