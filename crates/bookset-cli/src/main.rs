//! Bookset CLI - review and confirm per-class book orders.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "bookset=debug" } else { "bookset=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = cli.session_args();

    let result = match cli.command {
        Commands::Options => commands::options::run(&ctx),

        Commands::List {
            json,
            read_only,
            all,
        } => commands::list::run(&ctx, json, read_only, all),

        Commands::Select { subject, type_id } => commands::select::select(&ctx, &subject, &type_id),

        Commands::Deselect { subject, type_id } => {
            commands::select::deselect(&ctx, &subject, &type_id)
        }

        Commands::Drop {
            subject,
            type_id,
            component,
        } => commands::component::run(&ctx, &subject, &type_id, component, true),

        Commands::Restore {
            subject,
            type_id,
            component,
        } => commands::component::run(&ctx, &subject, &type_id, component, false),

        Commands::Customize {
            subject,
            type_id,
            component,
            field,
            value,
            clear,
        } => commands::customize::run(&ctx, &subject, &type_id, component, field, value, clear),

        Commands::AddSubject {
            subject,
            core_id,
            cover,
            spine,
        } => commands::subject::run(&ctx, &subject, &core_id, &cover, &spine),

        Commands::Assessment { action } => commands::assessment::run(&ctx, action),

        Commands::Filter {
            search,
            add,
            remove,
            clear,
        } => commands::filter::run(&ctx, search, add, remove, clear),

        Commands::Status { json } => commands::status::run(&ctx, json),

        Commands::Confirm { output } => commands::confirm::run(&ctx, output),

        Commands::Reset { yes } => commands::reset::run(&ctx, yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
