//! `docket list` command - list posts
//!
//! Posts are ordered by publication date, newest first; posts with an
//! unparseable date sort last, preserving store order among themselves.

use crate::cli::{Cli, OutputFormat};
use docket_core::error::Result;
use docket_core::records::escape_quotes;
use docket_core::store::Store;

/// Execute the list command
pub fn execute(cli: &Cli, store: &Store, tag: Option<&str>) -> Result<()> {
    let mut posts = store.list_posts()?;

    if let Some(tag) = tag {
        let needle = tag.to_lowercase();
        posts.retain(|p| p.tags.iter().any(|t| t.to_lowercase() == needle));
    }

    posts.sort_by_key(|p| std::cmp::Reverse(p.published_at()));

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
        OutputFormat::Human => {
            if posts.is_empty() {
                if !cli.quiet {
                    println!("No posts found");
                }
            } else {
                for post in &posts {
                    println!("{}  {}  {}", post.date, post.id, post.title);
                }
            }
        }
        OutputFormat::Records => {
            for post in &posts {
                println!(
                    r#"post id="{}" title="{}" date="{}" tags="{}""#,
                    escape_quotes(&post.id),
                    escape_quotes(&post.title),
                    escape_quotes(&post.date),
                    escape_quotes(&post.tags.join(",")),
                );
            }
        }
    }

    Ok(())
}
