use anyhow::{Context, Result};
use clap::Parser;

use release_outputs::cli::{run_extract_workflow, ExtractWorkflowArgs};
use release_outputs::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-outputs",
    about = "Export release title, description and tag from a JSON schema as CI step outputs"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the output lines instead of appending them")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("release-outputs {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let workflow_args = ExtractWorkflowArgs {
        dry_run: args.dry_run,
    };

    if !workflow_args.dry_run {
        ui::display_status(&format!("Reading release schema from {}", config.input.path));
    }

    let result = run_extract_workflow(&workflow_args, &config)
        .with_context(|| format!("Failed to export release outputs from {}", config.input.path))?;

    ui::display_workflow_result(&result, &config.output.env_var);
    Ok(())
}
