//! Git operations abstraction layer
//!
//! The bump workflow only needs two operations: commit every modified
//! tracked file, then tag the resulting commit. They sit behind the
//! [Repository] trait so the workflow can be exercised against
//! [mock::MockRepository] as well as a real repository.
//!
//! - [repository::Git2Repository]: implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory recorder for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
pub trait Repository {
    /// Stage every modified tracked file and commit it
    ///
    /// Equivalent to `git commit -am <message>`: untracked files are left
    /// alone and an unchanged tree is an error.
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the new commit
    /// * `Err` - If there is nothing to commit or a Git error occurs
    fn commit_all(&self, message: &str) -> Result<Oid>;

    /// Create a lightweight tag at given OID
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, OID doesn't exist, or Git error occurs
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;
}
