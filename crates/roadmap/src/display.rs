//! Table view of the team's current issues.

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use linear_api::IssueSnapshot;

const MAX_TITLE_CHARS: usize = 60;

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Color for a Linear workflow state name.
fn state_color(state: &str) -> Color {
    match state.to_ascii_lowercase().as_str() {
        "done" | "completed" => Color::Green,
        "in progress" | "started" => Color::Cyan,
        "in review" => Color::Magenta,
        "todo" | "unstarted" => Color::Yellow,
        "canceled" | "cancelled" | "duplicate" => Color::Red,
        _ => Color::DarkGrey,
    }
}

/// Create a table for displaying issues
#[must_use]
pub fn issue_table(issues: &[IssueSnapshot]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Labels").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Children").fg(Color::Cyan),
    ]);

    for issue in issues {
        let labels = issue.label_names();
        let state = issue.state_name();

        table.add_row(vec![
            Cell::new(&issue.identifier),
            Cell::new(truncate(&issue.title, MAX_TITLE_CHARS)),
            Cell::new(if labels.is_empty() { "-".to_string() } else { labels }),
            Cell::new(if state.is_empty() { "-" } else { state }).fg(state_color(state)),
            Cell::new(issue.children.nodes.len()),
        ]);
    }

    table
}

/// Print the roadmap table.
pub fn print_roadmap(issues: &[IssueSnapshot]) {
    println!();
    println!("{}", "Python Learning Roadmap".bold());
    if issues.is_empty() {
        println!("{}", "No issues found for this team.".bright_black());
        return;
    }

    println!("{}", issue_table(issues));
    println!("{}", format!("{} issues", issues.len()).bright_black());
}
