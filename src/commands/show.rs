//! `docket show` command - show a single post

use crate::cli::{Cli, OutputFormat};
use docket_core::error::Result;
use docket_core::records::escape_quotes;
use docket_core::store::Store;

/// Execute the show command
pub fn execute(cli: &Cli, store: &Store, id: &str) -> Result<()> {
    let post = store.get_post(id)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        OutputFormat::Human => {
            println!("{}", post.title);
            println!("by {} on {}", post.author, post.date);
            if let Some(jurisdiction) = &post.jurisdiction {
                println!("jurisdiction: {}", jurisdiction);
            }
            if !post.tags.is_empty() {
                println!("tags: {}", post.tags.join(", "));
            }
            println!();
            println!("{}", post.summary);
            println!();
            println!("{}", post.content);
            if let Some(citation) = &post.citation {
                println!();
                println!("cite as: {}", citation);
            }
            if !post.attachments.is_empty() {
                println!();
                println!("attachments:");
                for att in &post.attachments {
                    println!("  {} ({}, {} bytes)", att.name, att.guessed_mime(), att.size);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                r#"post id="{}" title="{}" date="{}" author="{}" tags="{}" attachments="{}""#,
                escape_quotes(&post.id),
                escape_quotes(&post.title),
                escape_quotes(&post.date),
                escape_quotes(&post.author),
                escape_quotes(&post.tags.join(",")),
                post.attachments.len(),
            );
        }
    }

    Ok(())
}
