//! CLI command implementations.

pub mod assessment;
pub mod component;
pub mod confirm;
pub mod customize;
pub mod filter;
pub mod list;
pub mod options;
pub mod reset;
pub mod select;
pub mod session;
pub mod status;
pub mod subject;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
