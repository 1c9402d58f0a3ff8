//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling
//!
//! Prompts take any `BufRead`/`Write` pair so they can be driven from tests.

use std::io::{BufRead, Write};

use crate::domain::{ProjectName, NAME_PATTERN};
use crate::error::{JsrKitError, Result};

pub mod formatter;

pub use formatter::{
    display_error, display_status, display_success, display_version_change, display_warning,
};

/// Prints `prompt` and reads one line, without its line terminator.
///
/// # Returns
/// * `Ok(Some(line))` - The line entered (possibly empty)
/// * `Ok(None)` - If the input stream is closed
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{} ", prompt).map_err(stdio_error)?;
    output.flush().map_err(stdio_error)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(stdio_error)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn stdio_error(e: std::io::Error) -> JsrKitError {
    JsrKitError::io("<stdio>", e)
}

/// Prompts until a valid `@scope/package` name is entered.
///
/// Empty lines re-prompt silently; invalid names print the expected pattern
/// and re-prompt. A closed input stream ends the loop with an
/// [`JsrKitError::Input`] error instead of re-prompting forever, so the caller
/// exits without creating anything.
pub fn prompt_project_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ProjectName> {
    loop {
        let Some(line) = read_line(input, output, "Enter the project name (@scope/package):")? else {
            return Err(JsrKitError::input(
                "input closed before a valid project name was entered",
            ));
        };
        if line.is_empty() {
            continue;
        }

        match ProjectName::parse(&line) {
            Ok(name) => return Ok(name),
            Err(e) => {
                tracing::debug!(error = %e, "rejected project name");
                writeln!(output, "Invalid project name. Must match regex /{}/", NAME_PATTERN)
                    .map_err(stdio_error)?;
            }
        }
    }
}

/// Prompts once for a free-text description; empty or closed input yields "".
pub fn prompt_description<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    Ok(read_line(input, output, "Enter the project description:")?.unwrap_or_default())
}
