//! UI helpers for the roadmap CLI.
//!
//! Provides consistent formatting for console output.

use colored::Colorize;

use crate::report::SyncReport;

/// Print the tool banner with a short description.
pub fn print_banner(title: &str, lines: &[&str]) {
    println!();
    println!("{}", "═".repeat(70).bright_black());
    println!("{}", title.blue().bold());
    println!("{}", "═".repeat(70).bright_black());
    for line in lines {
        println!("  {line}");
    }
    println!();
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
    println!("{}", "─".repeat(50).bright_black());
}

/// Print a step indicator with message.
pub fn print_step(message: &str) {
    println!("{} {}", "▶".cyan(), message.bold());
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a list item.
pub fn print_list_item(item: &str) {
    println!("  {} {item}", "•".bright_black());
}

/// Print a numbered step.
pub fn print_numbered_step(num: usize, message: &str) {
    println!("  {}. {}", num.to_string().cyan(), message);
}

/// Print the credentials a run needs.
pub fn print_credentials_hint() {
    print_warning("Make sure your Linear API credentials are set in the .env file:");
    println!("  LINEAR_API_KEY=your_api_key_here");
    println!("  LINEAR_TEAM_ID=your_team_id_here");
}

/// Print the end-of-run summary.
pub fn print_summary(report: &SyncReport) {
    let sub_tasks = report.sub_tasks();
    let modules_ok = report
        .modules
        .iter()
        .filter(|m| m.outcome != crate::report::Outcome::Failed)
        .count();

    print_section("Summary");
    println!(
        "  {} {} created, {} reused, {} failed",
        "Labels:".bright_black(),
        report.labels.created,
        report.labels.reused,
        report.labels.failed
    );
    println!(
        "  {} {}/{} in Linear",
        "Modules:".bright_black(),
        modules_ok,
        report.modules.len()
    );
    println!(
        "  {} {} created, {} reused, {} skipped, {} failed",
        "Sub-tasks:".bright_black(),
        sub_tasks.created,
        sub_tasks.reused,
        sub_tasks.skipped,
        sub_tasks.failed
    );

    for label in &report.failed_labels {
        print_list_item(&format!("label not created: {label}"));
    }
    println!();
}
