//! Add-subject command - order a book the catalogue does not list.

use bookset::selection::validate_manual_subject;
use colored::Colorize;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

pub fn run(
    args: &SessionArgs,
    subject: &str,
    core_id: &str,
    cover: &str,
    spine: &str,
) -> CommandResult {
    let mut session = Session::open(args)?;
    let manual = validate_manual_subject(subject, core_id, cover, spine)?;
    let type_id = manual.to_option(&session.config).type_id;

    let class_name = session.class_name().to_string();
    let config = session.config.clone();
    session
        .state
        .selections
        .add_manual_subject(&class_name, subject, core_id, cover, spine, &config);
    session.save()?;

    println!(
        "{} {} to {} as {}",
        "Added".green().bold(),
        manual.subject.white(),
        class_name,
        type_id.cyan()
    );
    Ok(())
}
