//! Reading and patching `deno.json` without disturbing its formatting.
//!
//! The manifest is parsed only to find the current `version`. Writes go back
//! through targeted text substitution so key order, indentation and every
//! other byte survive the bump.

use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use serde_json::Value;

use crate::domain::parse_or_zero;
use crate::error::{JsrKitError, Result};

/// A manifest file as read from disk.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    text: String,
    version_field: VersionField,
}

/// What the top-level `version` member holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionField {
    Missing,
    /// Present but not a JSON string
    NotAString,
    String(String),
}

impl VersionField {
    fn from_json(value: &Value) -> Self {
        match value.get("version") {
            None => VersionField::Missing,
            Some(Value::String(s)) => VersionField::String(s.clone()),
            Some(_) => VersionField::NotAString,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            VersionField::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| JsrKitError::io(path, e))?;
        Self::from_text(path, text)
    }

    /// Builds a manifest from text already in memory.
    pub fn from_text(path: impl Into<PathBuf>, text: String) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_json::from_str(&text)?;
        if !value.is_object() {
            return Err(JsrKitError::ManifestShape(path));
        }
        let version_field = VersionField::from_json(&value);
        tracing::debug!(path = %path.display(), version = ?version_field, "parsed manifest");

        Ok(Manifest {
            path,
            text,
            version_field,
        })
    }

    pub fn version_field(&self) -> &VersionField {
        &self.version_field
    }

    /// The version to bump from; `0.0.0` when missing or invalid.
    pub fn current_version(&self) -> Version {
        parse_or_zero(self.version_field.as_str())
    }

    /// The manifest text with its version set to `new_version`.
    pub fn with_version(&self, new_version: &Version) -> Result<String> {
        patch_version(&self.text, &self.version_field, &new_version.to_string())
    }

    /// Writes `text` back to the manifest's path.
    pub fn write(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| JsrKitError::io(&self.path, e))
    }
}

/// Rewrites the version in `text`, leaving everything else untouched.
///
/// When the root object's `version` member holds the old value verbatim, only
/// that value is replaced. Otherwise any existing top-level `version` member is
/// removed and a fresh one is inserted as the first member of the root object.
/// The result is re-parsed so a bad rewrite never reaches disk.
pub fn patch_version(text: &str, field: &VersionField, new_version: &str) -> Result<String> {
    let member = find_top_level_member(text, "version");

    let patched = match (field, member) {
        (VersionField::String(old), Some(span))
            if text[span.value_start..span.end] == format!("\"{}\"", old) =>
        {
            let mut out = String::with_capacity(text.len() + new_version.len());
            out.push_str(&text[..span.value_start]);
            out.push('"');
            out.push_str(new_version);
            out.push('"');
            out.push_str(&text[span.end..]);
            out
        }
        (_, Some(span)) => insert_first_member(&strip_member(text, span), new_version),
        (_, None) => insert_first_member(text, new_version),
    };

    ensure_valid_json(patched)
}

fn ensure_valid_json(text: String) -> Result<String> {
    serde_json::from_str::<Value>(&text)?;
    Ok(text)
}

/// Byte offsets of one `"key": value` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MemberSpan {
    /// Opening quote of the key
    start: usize,
    value_start: usize,
    /// One past the last byte of the value
    end: usize,
}

/// Finds `key` among the members of the root object, skipping nested objects,
/// arrays and string contents.
fn find_top_level_member(text: &str, key: &str) -> Option<MemberSpan> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let close = string_end(bytes, i)?;
                if depth == 1 && &text[i + 1..close - 1] == key {
                    let colon = skip_whitespace(bytes, close);
                    if bytes.get(colon) == Some(&b':') {
                        let value_start = skip_whitespace(bytes, colon + 1);
                        let end = value_end(bytes, value_start)?;
                        return Some(MemberSpan {
                            start: i,
                            value_start,
                            end,
                        });
                    }
                }
                i = close;
                continue;
            }
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Index just past the string starting at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Index just past the JSON value starting at `start`.
fn value_end(bytes: &[u8], start: usize) -> Option<usize> {
    match bytes.get(start)? {
        b'"' => string_end(bytes, start),
        b'{' | b'[' => {
            let mut depth = 0usize;
            let mut i = start;
            while i < bytes.len() {
                match bytes[i] {
                    b'"' => {
                        i = string_end(bytes, i)?;
                        continue;
                    }
                    b'{' | b'[' => depth += 1,
                    b'}' | b']' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i + 1);
                        }
                    }
                    _ => {}
                }
                i += 1;
            }
            None
        }
        _ => {
            let len = bytes[start..]
                .iter()
                .take_while(|b| !matches!(b, b',' | b'}' | b']') && !b.is_ascii_whitespace())
                .count();
            Some(start + len)
        }
    }
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

/// Removes a member with its leading whitespace and one adjacent comma.
fn strip_member(text: &str, span: MemberSpan) -> String {
    let bytes = text.as_bytes();
    let mut start = span.start;
    while start > 0 && bytes[start - 1].is_ascii_whitespace() {
        start -= 1;
    }

    let after = skip_whitespace(bytes, span.end);
    let end = if bytes.get(after) == Some(&b',') {
        after + 1
    } else {
        // Last member: drop the comma that separated it from its predecessor.
        if start > 0 && bytes[start - 1] == b',' {
            start -= 1;
        }
        span.end
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    out
}

fn insert_first_member(text: &str, new_version: &str) -> String {
    let Some(brace) = text.find('{') else {
        return text.to_string();
    };
    let (head, rest) = text.split_at(brace + 1);
    let separator = if rest.trim_start().starts_with('}') {
        ""
    } else {
        ","
    };
    format!(
        "{}\n  \"version\": \"{}\"{}{}",
        head, new_version, separator, rest
    )
}
