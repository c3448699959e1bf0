//! Reset command - discard every choice for the class.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(args: &SessionArgs, yes: bool) -> CommandResult {
    let mut session = Session::open(args)?;
    let class_name = session.class_name().to_string();

    if !yes && !confirm(&format!("Discard all selections for {}?", class_name))? {
        println!("{}", "Nothing changed.".dimmed());
        return Ok(());
    }

    session.state.selections.reset_class(&class_name);
    session.state.clear_filters();
    session.save()?;

    println!("{} {}", "Reset".yellow().bold(), class_name);
    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
