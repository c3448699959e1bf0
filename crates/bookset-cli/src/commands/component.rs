//! Drop and restore commands for one printed book of a selection.

use bookset::Component;
use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(
    args: &SessionArgs,
    subject: &str,
    type_id: &str,
    component: Component,
    drop: bool,
) -> CommandResult {
    let mut session = Session::open(args)?;
    let record = session.selection(subject, type_id)?;
    let subject_name = record.subject_name.clone();

    let has_component = record
        .selected_option
        .as_ref()
        .is_some_and(|o| o.has_component(component));
    if !has_component {
        return Err(format!(
            "{} ({}) has no {} book",
            subject_name,
            type_id,
            component.label()
        )
        .into());
    }

    let class_name = session.class_name().to_string();
    if drop {
        session
            .state
            .selections
            .drop_component(component, &class_name, &subject_name, type_id);
    } else {
        session
            .state
            .selections
            .restore_component(component, &class_name, &subject_name, type_id);
    }
    session.save()?;

    let verb = if drop { "Dropped".red().bold() } else { "Restored".green().bold() };
    println!("{} {} book of {} ({})", verb, component.label(), subject_name, type_id);
    Ok(())
}
