//! Confirm command - write the final order as JSON.

use std::fs;
use std::path::PathBuf;

use bookset::OrderLine;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use super::session::Session;
use super::CommandResult;
use crate::cli::SessionArgs;

/// A confirmed order as written to disk.
#[derive(Debug, Serialize)]
pub struct ConfirmedOrder<'a> {
    pub school_id: &'a str,
    pub class_name: &'a str,
    pub confirmed_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

pub fn run(args: &SessionArgs, output: Option<PathBuf>) -> CommandResult {
    let session = Session::open(args)?;
    session.require_class()?;

    let class_name = session.class_name();
    let lines = session
        .engine()
        .confirmed_order(&session.state.selections, class_name);
    if lines.is_empty() {
        return Err(format!("Nothing to order for {}. Select some books first.", class_name).into());
    }

    let order = ConfirmedOrder {
        school_id: &session.key.school_id,
        class_name,
        confirmed_at: Utc::now(),
        lines,
    };

    let path = output.unwrap_or_else(|| {
        session
            .storage
            .root()
            .join(format!("{}.order.json", session.key.file_stem()))
    });
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(&order)?)?;
    info!(path = %path.display(), lines = order.lines.len(), "wrote confirmed order");

    println!(
        "{} {} books for {} to {}",
        "Confirmed".green().bold(),
        order.lines.len(),
        class_name,
        path.display().to_string().white()
    );
    Ok(())
}
