use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser};

use jsr_kit::cli::{run_bump_workflow, BumpWorkflowArgs};
use jsr_kit::config;
use jsr_kit::domain::{TagPattern, VersionBump};
use jsr_kit::vcs::VcsOutcome;
use jsr_kit::{logging, ui, JsrKitError};

#[derive(clap::Parser)]
#[command(
    name = "jsr-bump",
    version,
    about = "Bump the version in deno.json, then commit and tag it"
)]
struct Args {
    #[arg(help = "Version component to increment: major, minor or patch")]
    bump: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,

    #[arg(short, long, help = "Manifest file to update [default: deno.json]")]
    manifest: Option<PathBuf>,

    #[arg(long, help = "Do not commit or tag, even inside a git repository")]
    no_git: bool,

    #[arg(long, help = "Print the new version without changing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    logging::init_logging(args.verbose)?;

    if !args.extra.is_empty() {
        tracing::debug!(ignored = ?args.extra, "ignoring extra arguments");
    }

    let bump = match args.bump.as_deref().unwrap_or("").parse::<VersionBump>() {
        Ok(bump) => bump,
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            process::exit(1);
        }
    };

    let tag_pattern = match TagPattern::new(config.bump.tag_pattern.clone()) {
        Ok(pattern) => pattern,
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    let workflow_args = BumpWorkflowArgs {
        bump,
        manifest: args.manifest.unwrap_or(config.bump.manifest),
        git: config.bump.git && !args.no_git,
        dry_run: args.dry_run,
        tag_pattern,
    };

    let outcome = match run_bump_workflow(&workflow_args) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&describe_failure(&e, &workflow_args));
            process::exit(1);
        }
    };

    let new_version = outcome.version.to_string();
    ui::display_version_change(outcome.previous.as_deref(), &new_version, args.dry_run);

    match outcome.vcs {
        None => ui::display_status("Dry run: manifest left unchanged"),
        Some(vcs) => {
            ui::display_success(&format!(
                "Updated {} to {}",
                workflow_args.manifest.display(),
                new_version
            ));
            match vcs {
                VcsOutcome::Tagged { commit, tag } => {
                    let short = commit.get(..7).unwrap_or(commit.as_str());
                    ui::display_success(&format!("Committed {} and tagged {}", short, tag));
                }
                VcsOutcome::Warned(warning) => ui::display_warning(&warning),
                VcsOutcome::NoRepository | VcsOutcome::Disabled => {}
            }
        }
    }

    Ok(())
}

fn describe_failure(err: &JsrKitError, args: &BumpWorkflowArgs) -> String {
    let manifest = args.manifest.display();
    match err {
        JsrKitError::Io { path, .. } if path == &args.manifest && err.is_not_found() => format!(
            "Couldn't read \"{}\". Are you in the right directory?",
            manifest
        ),
        JsrKitError::Manifest(e) => format!("\"{}\" isn't a valid JSON file: {}", manifest, e),
        other => other.to_string(),
    }
}
