use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset};
use git2::Oid;

use crate::error::{Result, WaybackError};
use crate::git::{CommitMeta, Repository};

/// Mock repository for testing without actual git operations.
///
/// Commits are stored in the order they are added, which stands in for
/// the backend's newest-first log order. The mock also counts open walk
/// iterators so tests can assert the walk resource is released on every
/// code path.
pub struct MockRepository {
    head: Option<Oid>,
    commits: Vec<CommitMeta>,
    tags: Vec<(String, Oid)>,
    times: HashMap<Oid, DateTime<FixedOffset>>,
    fail_log_at: Option<usize>,
    open_walks: Rc<Cell<usize>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            head: None,
            commits: Vec::new(),
            tags: Vec::new(),
            times: HashMap::new(),
            fail_log_at: None,
            open_walks: Rc::new(Cell::new(0)),
        }
    }

    /// Set the HEAD commit id
    pub fn set_head(&mut self, id: Oid) {
        self.head = Some(id);
    }

    /// Append a commit to the log. Callers add newest first.
    pub fn add_commit(&mut self, id: Oid, when: DateTime<FixedOffset>) {
        self.commits.push(CommitMeta { id, when });
        self.times.insert(id, when);
    }

    /// Add a tag pointing to a commit id
    pub fn add_tag(&mut self, name: impl Into<String>, target: Oid) {
        self.tags.push((name.into(), target));
    }

    /// Make the log iterator fail when it reaches `index`
    pub fn fail_log_at(&mut self, index: usize) {
        self.fail_log_at = Some(index);
    }

    /// Number of walk iterators currently alive
    pub fn open_walks(&self) -> usize {
        self.open_walks.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over mock commits that registers itself as an open walk
/// until dropped.
struct MockWalk {
    items: std::vec::IntoIter<Result<CommitMeta>>,
    open: Rc<Cell<usize>>,
}

impl Iterator for MockWalk {
    type Item = Result<CommitMeta>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl Drop for MockWalk {
    fn drop(&mut self) {
        self.open.set(self.open.get() - 1);
    }
}

impl Repository for MockRepository {
    fn head_id(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| WaybackError::tag("Mock repository has no HEAD"))
    }

    fn log_from(&self, _from: Oid) -> Result<Box<dyn Iterator<Item = Result<CommitMeta>> + '_>> {
        let items: Vec<Result<CommitMeta>> = self
            .commits
            .iter()
            .enumerate()
            .map(|(i, meta)| {
                if Some(i) == self.fail_log_at {
                    Err(WaybackError::tag("injected walk failure"))
                } else {
                    Ok(*meta)
                }
            })
            .collect();

        self.open_walks.set(self.open_walks.get() + 1);
        Ok(Box::new(MockWalk {
            items: items.into_iter(),
            open: Rc::clone(&self.open_walks),
        }))
    }

    fn tag_refs(&self) -> Result<Vec<(String, Oid)>> {
        Ok(self.tags.clone())
    }

    fn commit_time(&self, id: Oid) -> Result<DateTime<FixedOffset>> {
        self.times
            .get(&id)
            .copied()
            .ok_or_else(|| WaybackError::tag(format!("Mock has no commit {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LAYOUT;

    fn dt(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_str(s, LAYOUT).unwrap()
    }

    fn oid(b: u8) -> Oid {
        Oid::from_bytes(&[b; 20]).unwrap()
    }

    #[test]
    fn test_mock_repository_head() {
        let mut repo = MockRepository::new();
        assert!(repo.head_id().is_err());

        repo.set_head(oid(1));
        assert_eq!(repo.head_id().unwrap(), oid(1));
    }

    #[test]
    fn test_mock_repository_log_order_preserved() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(2), dt("2017-09-10 00:00:00 +0000"));
        repo.add_commit(oid(1), dt("2017-09-01 00:00:00 +0000"));

        let ids: Vec<Oid> = repo
            .log_from(oid(2))
            .unwrap()
            .map(|r| r.unwrap().id)
            .collect();
        assert_eq!(ids, vec![oid(2), oid(1)]);
    }

    #[test]
    fn test_mock_repository_walk_count_returns_to_zero() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), dt("2017-09-01 00:00:00 +0000"));

        {
            let walk = repo.log_from(oid(1)).unwrap();
            assert_eq!(repo.open_walks(), 1);
            drop(walk);
        }
        assert_eq!(repo.open_walks(), 0);
    }

    #[test]
    fn test_mock_repository_injected_failure() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(2), dt("2017-09-10 00:00:00 +0000"));
        repo.add_commit(oid(1), dt("2017-09-01 00:00:00 +0000"));
        repo.fail_log_at(1);

        let mut walk = repo.log_from(oid(2)).unwrap();
        assert!(walk.next().unwrap().is_ok());
        assert!(walk.next().unwrap().is_err());
    }

    #[test]
    fn test_mock_repository_tags_and_times() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), dt("2017-09-01 00:00:00 +0000"));
        repo.add_tag("v1.0.0", oid(1));

        assert_eq!(repo.tag_refs().unwrap().len(), 1);
        assert_eq!(
            repo.commit_time(oid(1)).unwrap(),
            dt("2017-09-01 00:00:00 +0000")
        );
        assert!(repo.commit_time(oid(9)).is_err());
    }
}
