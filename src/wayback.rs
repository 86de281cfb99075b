//! Wayback selection: the newest commit or tag strictly before a cutoff.
//!
//! Two policies over the same primitive (candidates newest-first, return
//! the first one older than the cutoff):
//!
//! - any-commit: walk the log from a starting point and stop at the first
//!   commit whose committer time predates the cutoff.
//! - tag-required: tags are not naturally time-ordered, so they are
//!   materialized with their target commit times, sorted newest-first,
//!   then scanned the same way.

use git2::Oid;

use crate::domain::tag::{self, TagInfo};
use crate::domain::Cutoff;
use crate::error::Result;
use crate::git::{CommitMeta, Repository};
use crate::ui::formatter;

/// Outcome of one selection attempt.
///
/// Hard failures travel separately as `Err`, so callers can tell "no
/// candidate qualifies" apart from "something broke mid-scan".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The newest candidate strictly before the cutoff
    Found {
        commit: CommitMeta,
        /// Tag name when the tag-required policy selected the commit
        tag: Option<String>,
    },
    /// No candidate in the visible history predates the cutoff
    NotFound,
}

impl Selection {
    pub fn is_found(&self) -> bool {
        matches!(self, Selection::Found { .. })
    }
}

/// One wayback query over a repository: a cutoff plus a policy flag.
pub struct Wayback<'r, R: Repository> {
    repo: &'r R,
    cutoff: Cutoff,
    require_tag: bool,
    debug: bool,
}

impl<'r, R: Repository> Wayback<'r, R> {
    pub fn new(repo: &'r R, cutoff: Cutoff, require_tag: bool) -> Self {
        Wayback {
            repo,
            cutoff,
            require_tag,
            debug: false,
        }
    }

    /// Print each scanned candidate while searching
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Dispatch on the policy flag. Pure dispatch, no shared state
    /// between the two algorithms.
    pub fn find(&self, from: Oid) -> Result<Selection> {
        if self.require_tag {
            self.find_first_tag()
        } else {
            self.find_first(from)
        }
    }

    /// First commit in the log from `from` strictly before the cutoff.
    ///
    /// Single pass over the iterator, which the backend promises is
    /// newest-first; a violated ordering gives a wrong (but still
    /// first-encountered) result. Iteration errors abort the walk and
    /// propagate unchanged. The walk resource is released when the
    /// iterator drops, on every exit path.
    pub fn find_first(&self, from: Oid) -> Result<Selection> {
        if self.debug {
            formatter::display_scan_header("commit", &self.cutoff);
        }

        for item in self.repo.log_from(from)? {
            let commit = item?;
            if self.debug {
                formatter::display_scan_row(&commit, None);
            }
            if self.cutoff.admits(commit.when) {
                return Ok(Selection::Found { commit, tag: None });
            }
        }

        Ok(Selection::NotFound)
    }

    /// Newest tag whose target commit is strictly before the cutoff.
    ///
    /// Enumerates every tag, resolves each target's committer time (any
    /// resolution failure aborts the whole call, partial results are
    /// never returned), sorts newest-first and scans once. Exhaustion is
    /// `NotFound`; the caller treats that as actionable for this policy.
    pub fn find_first_tag(&self) -> Result<Selection> {
        let mut infos = Vec::new();
        for (name, target) in self.repo.tag_refs()? {
            let when = self.repo.commit_time(target)?;
            infos.push(TagInfo::new(name, target, when));
        }

        tag::sort_newest_first(&mut infos);

        if self.debug {
            formatter::display_scan_header("tag", &self.cutoff);
        }

        for info in infos {
            let commit = CommitMeta {
                id: info.target,
                when: info.when,
            };
            if self.debug {
                formatter::display_scan_row(&commit, Some(&info.name));
            }
            if self.cutoff.admits(info.when) {
                return Ok(Selection::Found {
                    commit,
                    tag: Some(info.name),
                });
            }
        }

        Ok(Selection::NotFound)
    }
}

/// Report the tag pointing at the current HEAD commit, if any.
///
/// Linear scan over the tag list; independent of the wayback selection
/// but shares its tag-enumeration primitive. Returns the first matching
/// tag in enumeration order.
pub fn current_tag<R: Repository>(repo: &R) -> Result<Option<String>> {
    let head = repo.head_id()?;
    for (name, target) in repo.tag_refs()? {
        if target == head {
            return Ok(Some(name));
        }
    }
    Ok(None)
}
