use crate::error::{JsrKitError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// The pattern deno uses to validate `deno.json` names.
pub const NAME_PATTERN: &str = r"^@[a-z0-9-]+/[a-z0-9-]+$";

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

/// A JSR package name of the form `@scope/package`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    full: String,
    split: usize,
}

impl ProjectName {
    /// Validate a raw name against [`NAME_PATTERN`].
    pub fn parse(raw: &str) -> Result<Self> {
        if !name_regex().is_match(raw) {
            return Err(JsrKitError::invalid_name(format!(
                "'{}' must match {}",
                raw, NAME_PATTERN
            )));
        }
        let split = raw
            .find('/')
            .ok_or_else(|| JsrKitError::invalid_name(raw.to_string()))?;
        Ok(ProjectName {
            full: raw.to_string(),
            split,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The scope without its leading `@`
    pub fn scope_name(&self) -> &str {
        &self.full[1..self.split]
    }

    pub fn package(&self) -> &str {
        &self.full[self.split + 1..]
    }

    /// Directory name for the project: `@scope:package`
    pub fn folder_name(&self) -> String {
        self.full.replacen('/', ":", 1)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
