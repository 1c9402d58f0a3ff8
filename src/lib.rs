pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod scaffold;
pub mod ui;
pub mod vcs;
pub mod warning;

pub use error::{JsrKitError, Result};
