//! Command dispatch logic for docket

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use docket_core::error::{DocketError, Result};
use docket_core::store::Store;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the store root
    let root = cli
        .store
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if cli.verbose {
        eprintln!("resolve_root: {:?}", start.elapsed());
    }

    let Some(command) = &cli.command else {
        return Err(DocketError::UsageError(
            "no command specified (see --help)".to_string(),
        ));
    };

    let store = Store::open(&root)?;

    if cli.verbose {
        eprintln!("open_store: {:?}", start.elapsed());
    }

    match command {
        Commands::Search { query, tag, mode } => {
            commands::search::execute(cli, &store, query.as_deref(), tag, *mode)
        }
        Commands::List { tag } => commands::list::execute(cli, &store, tag.as_deref()),
        Commands::Tags => commands::tags::execute(cli, &store),
        Commands::Show { id } => commands::show::execute(cli, &store, id),
    }
}
