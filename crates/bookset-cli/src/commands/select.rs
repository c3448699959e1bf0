//! Select and deselect commands.

use colored::Colorize;
use tracing::info;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn select(args: &SessionArgs, subject: &str, type_id: &str) -> CommandResult {
    let mut session = Session::open(args)?;
    let (subject_name, option) = session.catalogue_option(subject, type_id)?;
    let label = option.label.clone();

    let class_name = session.class_name().to_string();
    session.state.selections.select_option(&class_name, &subject_name, option);
    session.save()?;
    info!(class_name, subject_name, type_id, "selected option");

    println!(
        "{} {} for {} ({})",
        "Selected".green().bold(),
        label.white(),
        subject_name,
        type_id
    );
    Ok(())
}

pub fn deselect(args: &SessionArgs, subject: &str, type_id: &str) -> CommandResult {
    let mut session = Session::open(args)?;
    let subject_name = session.selection(subject, type_id)?.subject_name.clone();

    let class_name = session.class_name().to_string();
    session.state.selections.deselect_option(&class_name, &subject_name, type_id);
    session.save()?;

    println!("{} {} for {}", "Removed".yellow().bold(), type_id, subject_name);
    Ok(())
}
