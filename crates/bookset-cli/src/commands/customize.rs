//! Customize command - override printed title, code or spine.

use bookset::{resolve_component, Component, CustomField};
use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(
    args: &SessionArgs,
    subject: &str,
    type_id: &str,
    component: Component,
    field: CustomField,
    value: Option<String>,
    clear: bool,
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
    let selections = &mut session.state.selections;
    match value {
        Some(value) if !clear => selections.set_custom_field(
            &class_name,
            &subject_name,
            type_id,
            component,
            field,
            value,
        ),
        _ => selections.clear_custom_field(
            &class_name,
            &subject_name,
            type_id,
            component,
            field,
        ),
    }
    session.save()?;

    let record = session.selection(&subject_name, type_id)?;
    let Some(effective) = resolve_component(record, component, &session.config) else {
        return Ok(());
    };

    println!(
        "{} {} book of {}",
        "Effective".cyan().bold(),
        component.label(),
        subject_name
    );
    let mark = |overridden: bool| if overridden { "custom".yellow() } else { "default".dimmed() };
    println!(
        "  Title: {} ({})",
        effective.title.value.white(),
        mark(effective.title.is_overridden())
    );
    println!("  Id:    {} ({})", effective.id.value, mark(effective.id.is_overridden()));
    println!(
        "  Spine: {} ({})",
        effective.spine.value.as_deref().unwrap_or("-"),
        mark(effective.spine.is_overridden())
    );
    Ok(())
}
