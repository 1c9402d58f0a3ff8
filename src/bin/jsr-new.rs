use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser};

use jsr_kit::cli::run_scaffold_workflow;
use jsr_kit::config;
use jsr_kit::domain::ProjectName;
use jsr_kit::scaffold::ScaffoldOptions;
use jsr_kit::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "jsr-new",
    version,
    about = "Scaffold a new JSR package with tests, README and a publish workflow"
)]
struct Args {
    #[arg(long, help = "Package name (@scope/package); prompted for when missing or invalid")]
    name: Option<String>,

    #[arg(long, help = "Package description; prompted for when missing")]
    description: Option<String>,

    #[arg(long, default_value = ".", help = "Directory to create the project in")]
    dir: PathBuf,

    #[arg(long, help = "License written to deno.json [default: ISC]")]
    license: Option<String>,

    #[arg(long, help = "Branch that triggers the publish workflow [default: main]")]
    branch: Option<String>,

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

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let preset = args.name.as_deref().and_then(|raw| match ProjectName::parse(raw) {
        Ok(name) => Some(name),
        Err(e) => {
            ui::display_error(&e.to_string());
            None
        }
    });
    let name = match preset {
        Some(name) => name,
        None => match ui::prompt_project_name(&mut input, &mut output) {
            Ok(name) => name,
            Err(e) => {
                ui::display_error(&e.to_string());
                process::exit(1);
            }
        },
    };

    let description = match args.description {
        Some(description) => description,
        None => ui::prompt_description(&mut input, &mut output)?,
    };

    let options = ScaffoldOptions {
        name,
        description,
        license: args.license.unwrap_or(config.scaffold.license),
        branch: args.branch.unwrap_or(config.scaffold.branch),
    };

    let outcome = match run_scaffold_workflow(&args.dir, &options) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&format!("Failed to create project: {}", e));
            process::exit(1);
        }
    };

    ui::display_success(&format!(
        "Project created successfully in {} ({} files)",
        outcome.root.display(),
        outcome.files.len()
    ));
    println!("\n{}", outcome.summary);

    Ok(())
}
