use crate::error::{JsrKitError, Result};

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a tag pattern, requiring a single `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches("{version}").count() != 1 {
            return Err(JsrKitError::config(format!(
                "Tag pattern '{}' should have exactly one {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            pattern: "v{version}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_format() {
        assert_eq!(TagPattern::default().format("1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_prefix() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(pattern.format("1.2.3"), "release-1.2.3");
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(TagPattern::new("latest").is_err());
        assert!(TagPattern::new("{version}-{version}").is_err());
    }
}
