//! Assessment command - exclude, restore, pick a variant or retitle.

use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::{AssessmentAction, SessionArgs};

pub fn run(args: &SessionArgs, action: AssessmentAction) -> CommandResult {
    let mut session = Session::open(args)?;
    session.require_class()?;
    let class_name = session.class_name().to_string();

    let selections = &mut session.state.selections;
    match action {
        AssessmentAction::Exclude => selections.exclude_assessment(&class_name),
        AssessmentAction::Restore => selections.restore_assessment(&class_name),
        AssessmentAction::Variant { variant } => {
            selections.set_assessment_variant(&class_name, variant)
        }
        AssessmentAction::Title { title, clear } => match title {
            Some(title) if !clear => selections.set_assessment_title(&class_name, title),
            _ => selections.clear_assessment_title(&class_name),
        },
    }
    session.save()?;

    match session.engine().resolve_assessment(&session.state.selections, &class_name) {
        Some(resolved) => {
            let state = if resolved.excluded {
                "excluded".red()
            } else {
                "included".green()
            };
            println!("{} {}", "Assessment for".cyan().bold(), class_name.white());
            println!("  Title:   {}", resolved.title.white().bold());
            println!("  Code:    {}", resolved.definition.id);
            println!("  Edition: {}", resolved.variant.label());
            println!("  Status:  {}", state);
        }
        None => {
            println!(
                "{} Select both English and Maths to get an assessment for {}.",
                "No assessment yet.".yellow().bold(),
                class_name
            );
        }
    }
    Ok(())
}
