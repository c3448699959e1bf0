//! List command - show the derived book list.

use bookset::{BookAction, PhysicalBookItem, ViewMode};
use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(args: &SessionArgs, json_output: bool, read_only: bool, all: bool) -> CommandResult {
    let session = Session::open(args)?;
    let mode = if read_only { ViewMode::ReadOnly } else { ViewMode::Editable };

    let items = session
        .engine()
        .derive_with_mode(&session.state.selections, session.class_name(), mode);
    let shown: Vec<&PhysicalBookItem> = if all {
        items.iter().collect()
    } else {
        session.state.filter_items(&items)
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!("{} {}", "Book list for".cyan().bold(), session.class_name().white());
    if !all && (!session.state.search_term.is_empty() || !session.state.active_filters.is_empty()) {
        println!(
            "{}",
            format!(
                "Showing {} of {} (search: '{}', filters: {})",
                shown.len(),
                items.len(),
                session.state.search_term,
                session.state.active_filters.iter().cloned().collect::<Vec<_>>().join(", ")
            )
            .dimmed()
        );
    }
    println!();

    if shown.is_empty() {
        println!("{}", "No books.".dimmed());
        return Ok(());
    }

    for (i, item) in shown.iter().enumerate() {
        print_item(i + 1, item);
    }

    Ok(())
}

fn print_item(index: usize, item: &PhysicalBookItem) {
    let title = if item.dropped {
        item.title.strikethrough().dimmed()
    } else {
        item.title.white().bold()
    };
    let kind = format!("{:<10}", item.kind.label());
    let actions: Vec<&str> = item
        .actions
        .iter()
        .map(|a| match a {
            BookAction::Drop => "drop",
            BookAction::Restore => "restore",
        })
        .collect();

    println!("{:>3}. {} {}", index, kind.blue(), title);
    if item.dropped {
        println!("     {}", "dropped".red());
    }
    if let Some(link) = &item.preview_link {
        println!("     preview: {}", link.dimmed());
    }
    if !actions.is_empty() {
        println!("     {} [{}]", item.key.dimmed(), actions.join(", "));
    }
}
