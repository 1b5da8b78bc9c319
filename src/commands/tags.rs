//! `docket tags` command - list unique tags

use crate::cli::{Cli, OutputFormat};
use docket_core::error::Result;
use docket_core::records::escape_quotes;
use docket_core::store::Store;

/// Execute the tags command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let tags = store.list_tags()?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }
        OutputFormat::Human => {
            if tags.is_empty() {
                if !cli.quiet {
                    println!("No tags found");
                }
            } else {
                for tag in &tags {
                    println!("{}", tag);
                }
            }
        }
        OutputFormat::Records => {
            for tag in &tags {
                println!(r#"tag name="{}""#, escape_quotes(tag));
            }
        }
    }

    Ok(())
}
