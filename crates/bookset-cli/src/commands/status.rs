//! Status command - show order progress and counts.

use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(args: &SessionArgs, json_output: bool) -> CommandResult {
    let session = Session::open(args)?;
    let class_name = session.class_name();
    let engine = session.engine();
    let store = &session.state.selections;

    let summary = engine.summary(store, class_name);
    let assessment = engine.resolve_assessment(store, class_name);
    let selections = store.records_for(class_name).filter(|r| r.selected_option.is_some()).count();
    let saved_at = session
        .state
        .saved_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    if json_output {
        let status = serde_json::json!({
            "school": session.key.school_id,
            "class": class_name,
            "known_class": session.catalogue.class_names().any(|c| c == class_name),
            "selections": selections,
            "active": summary.active,
            "dropped": summary.dropped,
            "assessment": assessment,
            "is_orderable": summary.is_orderable(),
            "saved_at": saved_at,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {} / {}",
        "Order status for".cyan().bold(),
        session.key.school_id.white(),
        class_name.white()
    );
    println!();

    println!("Selections: {}", selections.to_string().white().bold());
    println!();

    println!("{}", "Books:".yellow().bold());
    let rows = [
        ("Core", summary.active.core, summary.dropped.core),
        ("Workbook", summary.active.work, summary.dropped.work),
        ("Add-on", summary.active.addon, summary.dropped.addon),
        ("Assessment", summary.active.assessment, summary.dropped.assessment),
    ];
    for (label, active, dropped) in rows {
        println!(
            "  {:<11} {} active, {} dropped",
            format!("{}:", label),
            active.to_string().green(),
            dropped.to_string().red()
        );
    }
    println!(
        "  {:<11} {}",
        "Total:",
        summary.active.total().to_string().white().bold()
    );
    println!();

    match &assessment {
        Some(resolved) if resolved.excluded => {
            println!("Assessment: {} ({})", resolved.title, "excluded".red())
        }
        Some(resolved) => println!("Assessment: {} ({})", resolved.title, resolved.variant.label()),
        None => println!("Assessment: {}", "none".dimmed()),
    }
    if let Some(saved_at) = &saved_at {
        println!("Last saved: {}", saved_at.dimmed());
    }
    println!();

    if summary.is_orderable() {
        println!("Run {} to write the order.", "bookset confirm".cyan().bold());
    } else {
        println!(
            "Nothing to order yet. Run {} to see the catalogue.",
            "bookset options".cyan().bold()
        );
    }
    Ok(())
}
