//! Options command - show what the catalogue offers for a class.

use bookset::{CatalogueProvider, Component};
use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(args: &SessionArgs) -> CommandResult {
    let session = Session::open(args)?;
    session.require_class()?;

    let class_name = session.class_name();
    let offerings = session.catalogue.subjects_for(class_name).unwrap_or_default();

    println!("{} {}", "Catalogue options for".cyan().bold(), class_name.white());
    println!();

    for offering in &offerings {
        println!("{}", offering.subject.yellow().bold());
        for option in &offering.options {
            let selected = session
                .state
                .selections
                .record(class_name, &offering.subject, &option.type_id)
                .is_some();
            let marker = if selected { "*".green().bold() } else { " ".normal() };

            let components: Vec<&str> = Component::ALL
                .into_iter()
                .filter(|c| option.has_component(*c))
                .map(|c| c.slug())
                .collect();

            println!(
                "  {} {:<14} {:<28} [{}]",
                marker,
                option.type_id.white(),
                option.label,
                components.join(", ").dimmed()
            );
        }
    }

    if offerings.is_empty() {
        println!("{}", "No subjects offered.".dimmed());
    }

    // Manual subjects live only in the store
    let manual: Vec<_> = session
        .state
        .selections
        .records_for(class_name)
        .filter(|r| {
            r.selected_option
                .as_ref()
                .is_some_and(|o| o.is_manual(&session.config.manual_prefix))
        })
        .collect();
    if !manual.is_empty() {
        println!();
        println!("{}", "Manual subjects:".yellow().bold());
        for record in manual {
            println!(
                "  {} {:<14} {}",
                "*".green().bold(),
                record.type_id().unwrap_or_default().white(),
                record.subject_name
            );
        }
    }

    println!();
    println!("Pick an option with {}", "bookset select <SUBJECT> <TYPE_ID>".cyan().bold());

    Ok(())
}
