//! Guided roadmap creation.
//!
//! Checks for a `.env` file, creates the labels, then asks before creating
//! the modules and their sub-tasks.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Confirm};

use roadmap::bootstrap::{self, REQUIRED_VARS};
use roadmap::console::ConsoleReporter;
use roadmap::error::is_credentials_cause;
use roadmap::{ui, ExistingPolicy, Roadmap, RoadmapSync, SyncOptions};

#[derive(Parser)]
#[command(
    name = "create-roadmap",
    version,
    about = "Create the Python learning roadmap in Linear, step by step"
)]
struct Args {
    /// Create all modules without asking.
    #[arg(short, long)]
    yes: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Reuse labels and issues that already exist instead of creating duplicates.
    #[arg(long, env = "ROADMAP_SKIP_EXISTING")]
    skip_existing: bool,

    /// Env file holding the Linear credentials.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    roadmap::init_tracing(args.verbose);

    match run(&args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            ui::print_error(&format!("Error: {e:#}"));
            if e.chain().any(is_credentials_cause) {
                ui::print_credentials_hint();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<bool> {
    ui::print_banner(
        "Python Learning Roadmap Creator",
        &["Creates labels, 10 learning modules and 50 sub-tasks in Linear."],
    );

    if !args.env_file.exists() {
        ui::print_error(&format!("{} file not found!", args.env_file.display()));
        ui::print_info("Please create it with your Linear credentials:");
        for var in REQUIRED_VARS {
            ui::print_list_item(&format!("{var}=..."));
        }
        return Ok(false);
    }

    bootstrap::load_env_file(&args.env_file)?;

    let client = roadmap::client_from_env()?;
    let reporter = ConsoleReporter::new();
    let roadmap = Roadmap::python_curriculum();
    let module_count = roadmap.modules.len();

    let options = SyncOptions {
        existing: if args.skip_existing {
            ExistingPolicy::ReuseExisting
        } else {
            ExistingPolicy::AlwaysCreate
        },
        ..SyncOptions::default()
    };
    let mut sync = RoadmapSync::new(&client, roadmap)
        .with_options(options)
        .with_reporter(&reporter);

    ui::print_step("Setting up labels...");
    sync.setup_labels().await.context("Label setup aborted")?;

    let proceed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Would you like to create all {module_count} modules with sub-tasks? (y/n)"
            ))
            .default(false)
            .show_default(false)
            .interact()?;

    if !proceed {
        ui::print_info("Only labels were created. Run again to create the modules.");
        return Ok(sync.report().labels.failed == 0);
    }

    ui::print_step("Creating modules...");
    sync.create_all_modules()
        .await
        .context("Module creation aborted")?;

    let report = sync.report();
    ui::print_summary(report);

    if report.is_complete() {
        ui::print_success("Python Learning Roadmap created successfully!");
        ui::print_info("Check your Linear workspace to see the roadmap.");
        Ok(true)
    } else {
        ui::print_warning("Roadmap created with failures; see above for the affected items.");
        Ok(false)
    }
}
