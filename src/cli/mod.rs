//! Workflows behind the two binaries.
//!
//! `main` functions only parse arguments and print; the steps themselves
//! live here so they can be driven from tests without clap.

pub mod bump;
pub mod new;

pub use bump::{run_bump_workflow, BumpOutcome, BumpWorkflowArgs};
pub use new::{run_scaffold_workflow, ScaffoldOutcome};
