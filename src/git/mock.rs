use crate::error::{JsrKitError, Result};
use crate::git::Repository;
use git2::Oid;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    commits: RefCell<Vec<(Oid, String)>>,
    tags: RefCell<Vec<(String, Oid)>>,
    fail_commit: bool,
    fail_tag: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `commit_all` call fail
    pub fn failing_commits(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    /// Make every `create_tag` call fail
    pub fn failing_tags(mut self) -> Self {
        self.fail_tag = true;
        self
    }

    /// Commit messages recorded so far, oldest first
    pub fn commit_messages(&self) -> Vec<String> {
        self.commits.borrow().iter().map(|(_, m)| m.clone()).collect()
    }

    /// Tags recorded so far with the commit they point at
    pub fn tags(&self) -> Vec<(String, Oid)> {
        self.tags.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn commit_all(&self, message: &str) -> Result<Oid> {
        if self.fail_commit {
            return Err(JsrKitError::Git(git2::Error::from_str("mock commit failure")));
        }
        let mut commits = self.commits.borrow_mut();
        let seed = u8::try_from(commits.len() + 1).unwrap_or(u8::MAX);
        let oid = Oid::from_bytes(&[seed; 20])?;
        commits.push((oid, message.to_string()));
        Ok(oid)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        if self.fail_tag {
            return Err(JsrKitError::Git(git2::Error::from_str("mock tag failure")));
        }
        let mut tags = self.tags.borrow_mut();
        if tags.iter().any(|(existing, _)| existing == name) {
            return Err(JsrKitError::Git(git2::Error::from_str("tag already exists")));
        }
        tags.push((name.to_string(), oid));
        Ok(())
    }
}
