//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries the wayback selection needs, allowing for multiple
//! implementations including real repositories and mocks for testing.
//!
//! The primary abstraction is the [Repository] trait. Concrete
//! implementations:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations so any backend satisfying it is substitutable.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use chrono::{DateTime, FixedOffset};
use git2::Oid;

use crate::error::Result;

/// Committer timestamp and identity of one commit.
///
/// The only commit attributes selection ever looks at. The commit itself
/// stays owned by the repository; this is a borrowed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitMeta {
    /// The commit object id
    pub id: Oid,
    /// The committer timestamp (not the authoring time)
    pub when: DateTime<FixedOffset>,
}

/// Read-only repository capability trait.
///
/// Narrow by design: the wayback selection needs a head lookup, a commit
/// log, tag enumeration and commit-time resolution, nothing else. The
/// whole crate is single-threaded and every query runs to completion
/// before the next begins, so implementors need no internal locking.
pub trait Repository {
    /// The commit id the current HEAD points at
    fn head_id(&self) -> Result<Oid>;

    /// Reverse-chronological commit iterator starting at `from`.
    ///
    /// The returned iterator owns whatever walk resource the backend
    /// holds open; dropping it releases that resource, on every exit
    /// path. Selection correctness depends on the newest-first ordering
    /// this method promises; the walker does not re-sort.
    fn log_from(&self, from: Oid) -> Result<Box<dyn Iterator<Item = Result<CommitMeta>> + '_>>;

    /// All tags with their peeled target commit ids.
    ///
    /// Order is whatever the backend enumerates, not assumed sorted.
    /// Annotated tags are peeled through to the commit they reference.
    fn tag_refs(&self) -> Result<Vec<(String, Oid)>>;

    /// Committer timestamp of the commit identified by `id`.
    ///
    /// A missing or non-commit object is a hard error, never `NotFound`.
    fn commit_time(&self, id: Oid) -> Result<DateTime<FixedOffset>>;
}
