//! Domain logic - pure rules independent of the filesystem and git

pub mod name;
pub mod tag;
pub mod version;

pub use name::{ProjectName, NAME_PATTERN};
pub use tag::TagPattern;
pub use version::{bump_version, parse_or_zero, VersionBump};
