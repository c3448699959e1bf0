//! Filter command - update the saved search and filters.

use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(
    args: &SessionArgs,
    search: Option<String>,
    add: Vec<String>,
    remove: Vec<String>,
    clear: bool,
) -> CommandResult {
    let mut session = Session::open(args)?;
    let state = &mut session.state;

    if clear {
        state.clear_filters();
    }
    if let Some(term) = search {
        state.search_term = term;
    }
    for filter in add {
        if !state.add_filter(filter.clone()) {
            println!("{} {}", "Already active:".dimmed(), filter);
        }
    }
    for filter in &remove {
        if !state.remove_filter(filter) {
            println!("{} {}", "Not active:".dimmed(), filter);
        }
    }
    session.save()?;

    let state = &session.state;
    println!("{} {}", "Filters for".cyan().bold(), session.class_name().white());
    let search = if state.search_term.is_empty() { "-" } else { state.search_term.as_str() };
    println!("  Search:  {}", search);
    if state.active_filters.is_empty() {
        println!("  Filters: -");
    } else {
        let filters: Vec<&str> = state.active_filters.iter().map(String::as_str).collect();
        println!("  Filters: {}", filters.join(", "));
    }
    Ok(())
}
