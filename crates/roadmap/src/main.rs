//! Roadmap CLI.
//!
//! Creates the Python learning roadmap in Linear (labels, 10 module issues,
//! 5 sub-issues each), shows the team's current issues, or prepares the
//! local environment.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use linear_api::ResourceClient;

use roadmap::bootstrap::{self, EnvFileStatus};
use roadmap::console::ConsoleReporter;
use roadmap::error::is_credentials_cause;
use roadmap::menu::MenuChoice;
use roadmap::{display, ui, ExistingPolicy, Roadmap, RoadmapSync, SyncOptions};

/// Python Learning Roadmap manager for Linear.
#[derive(Parser)]
#[command(
    name = "roadmap",
    version,
    about = "Create and inspect the Python learning roadmap in Linear",
    long_about = "Create the Python learning roadmap in Linear.\n\n\
                  Requires LINEAR_API_KEY and LINEAR_TEAM_ID in the environment\n\
                  or in a .env file in the working directory.\n\n\
                  Without a subcommand an interactive menu is shown."
)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reuse labels and issues that already exist instead of creating duplicates.
    #[arg(long, global = true, env = "ROADMAP_SKIP_EXISTING")]
    skip_existing: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create labels, all modules and their sub-tasks.
    Create,

    /// Display the team's current issues.
    Display {
        /// Maximum number of issues to list.
        #[arg(short, long, default_value_t = 100)]
        limit: u32,
    },

    /// Create the roadmap labels only.
    Labels,

    /// Prepare the local environment (.env file and data directory).
    Bootstrap(BootstrapArgs),
}

#[derive(Args)]
struct BootstrapArgs {
    /// Template copied to the env file when it does not exist.
    #[arg(long, default_value = "env.example")]
    template: PathBuf,

    /// Env file to create.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Data directory to create.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Create the roadmap in Linear once the environment is ready.
    #[arg(long)]
    with_linear: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Real environment variables take precedence over .env
    if let Err(e) = bootstrap::load_env_file(Path::new(".env")) {
        ui::print_warning(&e.to_string());
    }

    let cli = Cli::parse();
    roadmap::init_tracing(cli.verbose);

    match run(cli).await {
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

/// Returns `Ok(false)` when the command finished but left work undone.
async fn run(cli: Cli) -> Result<bool> {
    let options = SyncOptions {
        existing: if cli.skip_existing {
            ExistingPolicy::ReuseExisting
        } else {
            ExistingPolicy::AlwaysCreate
        },
        ..SyncOptions::default()
    };

    let command = match cli.command {
        Some(command) => command,
        None => match prompt_menu()? {
            MenuChoice::CreateRoadmap => Commands::Create,
            MenuChoice::DisplayRoadmap => Commands::Display { limit: 100 },
            MenuChoice::SetupLabels => Commands::Labels,
        },
    };

    match command {
        Commands::Create => create_roadmap(options).await,
        Commands::Display { limit } => display_roadmap(limit).await,
        Commands::Labels => setup_labels(options).await,
        Commands::Bootstrap(args) => bootstrap_environment(&args, options).await,
    }
}

fn prompt_menu() -> Result<MenuChoice> {
    ui::print_banner(
        "Python Learning Roadmap Manager",
        &[
            "This tool creates a comprehensive learning roadmap in Linear.",
            "Make sure you have set LINEAR_API_KEY and LINEAR_TEAM_ID in your .env file.",
        ],
    );
    print!("{}", MenuChoice::prompt());

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter choice (1-3)")
        .interact_text()?;

    Ok(input.parse::<MenuChoice>()?)
}

async fn create_roadmap(options: SyncOptions) -> Result<bool> {
    let client = roadmap::client_from_env()?;
    let reporter = ConsoleReporter::new();

    ui::print_section("Creating Python Learning Roadmap...");
    let mut sync = RoadmapSync::new(&client, Roadmap::python_curriculum())
        .with_options(options)
        .with_reporter(&reporter);

    sync.run().await.context("Roadmap creation aborted")?;
    let report = sync.into_report();
    ui::print_summary(&report);

    if report.is_complete() {
        ui::print_success("Complete roadmap created successfully!");
        ui::print_info("You can now view your roadmap in Linear and start learning!");
        Ok(true)
    } else {
        ui::print_warning("Roadmap created with failures; see above for the affected items.");
        Ok(false)
    }
}

async fn setup_labels(options: SyncOptions) -> Result<bool> {
    let client = roadmap::client_from_env()?;
    let reporter = ConsoleReporter::new();

    let mut sync = RoadmapSync::new(&client, Roadmap::python_curriculum())
        .with_options(options)
        .with_reporter(&reporter);

    sync.setup_labels().await.context("Label setup aborted")?;
    Ok(sync.report().labels.failed == 0)
}

async fn display_roadmap(limit: u32) -> Result<bool> {
    let client = roadmap::client_from_env()?;
    let issues = client
        .list_issues(limit)
        .await
        .context("Failed to list issues")?;

    display::print_roadmap(&issues);
    Ok(true)
}

async fn bootstrap_environment(args: &BootstrapArgs, options: SyncOptions) -> Result<bool> {
    ui::print_section("Setting up environment...");

    match bootstrap::ensure_env_file(&args.env_file, &args.template)? {
        EnvFileStatus::Created => {
            ui::print_success(&format!(
                "Created {} from {}",
                args.env_file.display(),
                args.template.display()
            ));
            ui::print_warning("Please update it with your Linear API credentials");
        }
        EnvFileStatus::AlreadyExists => {
            ui::print_info(&format!("{} already exists", args.env_file.display()));
        }
        EnvFileStatus::TemplateMissing => {
            ui::print_warning(&format!(
                "Neither {} nor {} found",
                args.env_file.display(),
                args.template.display()
            ));
        }
    }

    if bootstrap::ensure_data_dir(&args.data_dir)? {
        ui::print_success(&format!("Created {} directory", args.data_dir.display()));
    } else {
        ui::print_info(&format!("{} directory already exists", args.data_dir.display()));
    }

    let ready = if args.env_file.exists() {
        let missing = bootstrap::missing_vars(&args.env_file)?;
        if !missing.is_empty() {
            ui::print_warning(&format!("Missing from {}:", args.env_file.display()));
            for var in &missing {
                ui::print_list_item(var);
            }
        }
        missing.is_empty()
    } else {
        ui::print_credentials_hint();
        false
    };

    if args.with_linear {
        if !ready {
            ui::print_error("Linear credentials are not set, skipping roadmap creation");
            return Ok(false);
        }
        bootstrap::load_env_file(&args.env_file)?;
        return create_roadmap(options).await;
    }

    ui::print_section("Next Steps");
    ui::print_numbered_step(1, "Set LINEAR_API_KEY and LINEAR_TEAM_ID in .env");
    ui::print_numbered_step(2, "Run `roadmap labels` to create the labels");
    ui::print_numbered_step(3, "Run `roadmap create` (or `create-roadmap`) to create all modules");
    ui::print_numbered_step(4, "Run `roadmap display` to review the roadmap");
    ui::print_info("`roadmap bootstrap --with-linear` runs steps 2 and 3 right after setup");
    println!();

    Ok(true)
}
