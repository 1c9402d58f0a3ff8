//! Project scaffolding: templates, concurrent writer and next-steps summary.

pub mod summary;
pub mod templates;
pub mod writer;

pub use summary::next_steps;
pub use templates::{build_file_manifest, FileManifest, ScaffoldOptions};
pub use writer::write_project;
