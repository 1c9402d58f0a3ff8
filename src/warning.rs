use std::fmt;

/// Non-fatal problems hit after the manifest has been written.
///
/// The bump has already succeeded when these occur, so they are reported to
/// the user instead of failing the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// Staging or committing the manifest change failed
    CommitFailed { version: String, reason: String },
    /// The commit exists but the tag could not be created
    TagFailed {
        tag: String,
        commit: String,
        reason: String,
    },
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::CommitFailed { version, reason } => {
                write!(f, "Could not commit version {}: {}", version, reason)
            }
            BumpWarning::TagFailed {
                tag,
                commit,
                reason,
            } => {
                let short_hash = if commit.len() > 7 {
                    &commit[..7]
                } else {
                    commit.as_str()
                };
                write!(
                    f,
                    "Could not create tag '{}' on {}: {}",
                    tag, short_hash, reason
                )
            }
        }
    }
}
