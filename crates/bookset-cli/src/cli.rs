//! CLI argument definitions using clap.

use std::path::PathBuf;

use bookset::{AssessmentVariant, Component, CustomField};
use clap::{Parser, Subcommand};

/// Bookset: pick, customize and confirm book orders per class
#[derive(Parser)]
#[command(name = "bookset")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalogue document (JSON)
    #[arg(long, global = true, default_value = "catalogue.json")]
    pub catalogue: PathBuf,

    /// Engine configuration (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved workflows
    #[arg(long, global = true, default_value = ".bookset")]
    pub store: PathBuf,

    /// School identifier
    #[arg(long, global = true, default_value = "default")]
    pub school: String,

    /// Class or grade to work on
    #[arg(short, long, global = true)]
    pub class: Option<String>,

    /// Keep timestamped copies of previous saves
    #[arg(long, global = true)]
    pub history: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Arguments every command needs to open a session.
    pub fn session_args(&self) -> SessionArgs {
        SessionArgs {
            catalogue: self.catalogue.clone(),
            config: self.config.clone(),
            store: self.store.clone(),
            school: self.school.clone(),
            class: self.class.clone(),
            history: self.history,
        }
    }
}

/// Global arguments detached from the subcommand.
#[derive(Debug, Clone)]
pub struct SessionArgs {
    pub catalogue: PathBuf,
    pub config: Option<PathBuf>,
    pub store: PathBuf,
    pub school: String,
    pub class: Option<String>,
    pub history: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the catalogue options for the class
    Options,

    /// Show the derived book list
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Hide drop/restore actions
        #[arg(long)]
        read_only: bool,

        /// Ignore the saved search and filters
        #[arg(long)]
        all: bool,
    },

    /// Pick a catalogue option for a subject
    Select {
        #[arg(value_name = "SUBJECT")]
        subject: String,

        #[arg(value_name = "TYPE_ID")]
        type_id: String,
    },

    /// Remove a picked option
    Deselect {
        #[arg(value_name = "SUBJECT")]
        subject: String,

        #[arg(value_name = "TYPE_ID")]
        type_id: String,
    },

    /// Drop one book of a selection from the order
    Drop {
        #[arg(value_name = "SUBJECT")]
        subject: String,

        #[arg(value_name = "TYPE_ID")]
        type_id: String,

        /// Component to drop (core, work, addon)
        #[arg(value_name = "COMPONENT")]
        component: Component,
    },

    /// Put a dropped book back into the order
    Restore {
        #[arg(value_name = "SUBJECT")]
        subject: String,

        #[arg(value_name = "TYPE_ID")]
        type_id: String,

        /// Component to restore (core, work, addon)
        #[arg(value_name = "COMPONENT")]
        component: Component,
    },

    /// Override a printed title, code or spine
    Customize {
        #[arg(value_name = "SUBJECT")]
        subject: String,

        #[arg(value_name = "TYPE_ID")]
        type_id: String,

        /// Component to edit (core, work, addon)
        #[arg(value_name = "COMPONENT")]
        component: Component,

        /// Field to edit (title, id, spine)
        #[arg(value_name = "FIELD")]
        field: CustomField,

        /// New value; an empty string blanks the field
        #[arg(value_name = "VALUE", required_unless_present = "clear")]
        value: Option<String>,

        /// Remove the override and show the catalogue default again
        #[arg(long, conflicts_with = "value")]
        clear: bool,
    },

    /// Add a subject that is not in the catalogue
    AddSubject {
        #[arg(value_name = "SUBJECT")]
        subject: String,

        /// Catalogue code of the core book
        #[arg(value_name = "CORE_ID")]
        core_id: String,

        /// Cover title of the core book
        #[arg(long, default_value = "")]
        cover: String,

        /// Spine code of the core book
        #[arg(long, default_value = "")]
        spine: String,
    },

    /// Manage the class assessment
    Assessment {
        #[command(subcommand)]
        action: AssessmentAction,
    },

    /// Update the saved search and filters
    Filter {
        /// Free-text search over titles
        #[arg(long)]
        search: Option<String>,

        /// Add a filter (subject name or book kind)
        #[arg(long)]
        add: Vec<String>,

        /// Remove a filter
        #[arg(long)]
        remove: Vec<String>,

        /// Clear the search and all filters
        #[arg(long)]
        clear: bool,
    },

    /// Show order progress and counts
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the confirmed order
    Confirm {
        /// Output path (default: <school>__<class>.order.json in the store directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Discard every choice for the class
    Reset {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum AssessmentAction {
    /// Drop the assessment from the order
    Exclude,

    /// Put the assessment back
    Restore,

    /// Choose the edition (with-marks, without-marks)
    Variant {
        #[arg(value_name = "VARIANT")]
        variant: AssessmentVariant,
    },

    /// Override the printed title
    Title {
        #[arg(value_name = "TITLE", required_unless_present = "clear")]
        title: Option<String>,

        /// Remove the override
        #[arg(long, conflicts_with = "title")]
        clear: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drop() {
        let cli = Cli::try_parse_from([
            "bookset", "--class", "UKG", "drop", "English", "ukg-eng-1", "workbook",
        ])
        .unwrap();
        assert_eq!(cli.session_args().class.as_deref(), Some("UKG"));
        match cli.command {
            Commands::Drop { component, .. } => assert_eq!(component, Component::Work),
            _ => panic!("expected drop"),
        }
    }

    #[test]
    fn test_parse_customize_clear() {
        let cli = Cli::try_parse_from([
            "bookset", "customize", "English", "ukg-eng-1", "core", "spine", "--clear",
        ])
        .unwrap();
        match cli.command {
            Commands::Customize { field, value, clear, .. } => {
                assert_eq!(field, CustomField::Spine);
                assert!(value.is_none());
                assert!(clear);
            }
            _ => panic!("expected customize"),
        }
    }

    #[test]
    fn test_customize_needs_value_or_clear() {
        let result =
            Cli::try_parse_from(["bookset", "customize", "English", "ukg-eng-1", "core", "title"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_assessment_variant() {
        let cli =
            Cli::try_parse_from(["bookset", "assessment", "variant", "without-marks"]).unwrap();
        match cli.command {
            Commands::Assessment {
                action: AssessmentAction::Variant { variant },
            } => assert_eq!(variant, AssessmentVariant::WithoutMarks),
            _ => panic!("expected assessment variant"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bookset", "status"]).unwrap();
        let args = cli.session_args();
        assert_eq!(args.school, "default");
        assert_eq!(args.store, PathBuf::from(".bookset"));
        assert!(args.class.is_none());
    }
}
