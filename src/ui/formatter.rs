//! Pure formatting functions for UI output.
//!
//! Everything here only prints; reading input lives in the parent module.

use console::style;

use crate::warning::BumpWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning raised after the bump was written.
pub fn display_warning(warning: &BumpWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version change (or the dry-run preview of it).
pub fn display_version_change(old: Option<&str>, new: &str, dry_run: bool) {
    let heading = if dry_run {
        "Version change (dry run):"
    } else {
        "Version change:"
    };
    println!("\n{}", style(heading).bold());
    match old {
        Some(old) => println!("  From: {}", style(old).red()),
        None => println!("  From: {}", style("(none)").dim()),
    }
    println!("  To:   {}", style(new).green());
}
