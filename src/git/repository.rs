use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeZone};
use git2::{Oid, Repository as Git2Repo};

use crate::error::{Result, WaybackError};
use crate::git::CommitMeta;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

/// Convert a git2 commit time (epoch seconds + offset minutes) into a
/// timezone-aware timestamp.
fn datetime_from_git(time: git2::Time) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(|| {
        WaybackError::time(format!(
            "invalid UTC offset on commit: {} minutes",
            time.offset_minutes()
        ))
    })?;

    offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .ok_or_else(|| {
            WaybackError::time(format!("invalid commit timestamp: {}", time.seconds()))
        })
}

impl super::Repository for Git2Repository {
    fn head_id(&self) -> Result<Oid> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id())
    }

    fn log_from(&self, from: Oid) -> Result<Box<dyn Iterator<Item = Result<CommitMeta>> + '_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(git2::Sort::TIME)?;
        revwalk.push(from)?;

        let repo = &self.repo;
        Ok(Box::new(revwalk.map(move |oid_result| {
            let oid = oid_result?;
            let commit = repo.find_commit(oid)?;
            Ok(CommitMeta {
                id: oid,
                when: datetime_from_git(commit.time())?,
            })
        })))
    }

    fn tag_refs(&self) -> Result<Vec<(String, Oid)>> {
        let names = self.repo.tag_names(None)?;
        let mut refs = Vec::new();

        for name in names.iter().flatten() {
            let reference = self
                .repo
                .find_reference(&format!("refs/tags/{}", name))
                .map_err(|e| WaybackError::tag(format!("Cannot find tag '{}': {}", name, e)))?;

            // Peel through annotated tag objects to the commit they reference
            let target = reference
                .peel(git2::ObjectType::Commit)
                .map_err(|e| WaybackError::tag(format!("Cannot peel tag '{}': {}", name, e)))?
                .id();

            refs.push((name.to_string(), target));
        }

        Ok(refs)
    }

    fn commit_time(&self, id: Oid) -> Result<DateTime<FixedOffset>> {
        let commit = self.repo.find_commit(id)?;
        datetime_from_git(commit.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_from_git_with_offset() {
        // 2017-09-04 19:43:36 +0300 as epoch seconds
        let time = git2::Time::new(1504543416, 180);
        let when = datetime_from_git(time).unwrap();
        assert_eq!(
            when.format("%Y-%m-%d %H:%M:%S %z").to_string(),
            "2017-09-04 19:43:36 +0300"
        );
    }

    #[test]
    fn test_datetime_from_git_utc() {
        let time = git2::Time::new(0, 0);
        let when = datetime_from_git(time).unwrap();
        assert_eq!(
            when.format("%Y-%m-%d %H:%M:%S %z").to_string(),
            "1970-01-01 00:00:00 +0000"
        );
    }
}
