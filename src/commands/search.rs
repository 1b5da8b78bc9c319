//! `docket search` command - rank posts by relevance
//!
//! Every post is scored and returned; search reorders the corpus
//! rather than filtering it. The JSON envelope here is the canonical
//! result shape: any other front end presenting the same corpus must
//! produce an identical ordering for identical inputs.

use chrono::Utc;

use crate::cli::{Cli, OutputFormat};
use docket_core::config::DocketConfig;
use docket_core::error::Result;
use docket_core::rank::{self, QuerySpec, SearchMode};
use docket_core::records::escape_quotes;
use docket_core::store::Store;

/// Execute the search command
pub fn execute(
    cli: &Cli,
    store: &Store,
    query_text: Option<&str>,
    tags: &[String],
    mode_hint: Option<SearchMode>,
) -> Result<()> {
    let posts = store.list_posts()?;
    let config = DocketConfig::load(store.root())?;

    let query = QuerySpec::new(query_text.map(str::to_string), tags.to_vec());

    // The mode flag is a hint only; what the query actually contains wins
    if let Some(hint) = mode_hint {
        if hint != query.mode() {
            tracing::debug!(hint = %hint, derived = %query.mode(), "mode hint disagrees with query content");
        }
    }

    let results = rank::search(&posts, &query, &config.ranking, Utc::now());

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Human => {
            if results.posts.is_empty() {
                if !cli.quiet {
                    println!("No posts found");
                }
            } else {
                for scored in &results.posts {
                    let tag_note = if scored.matched_tags.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", scored.matched_tags.join(", "))
                    };
                    println!(
                        "{:>7.2}  {}  {}{}",
                        scored.relevance, scored.post.id, scored.post.title, tag_note
                    );
                }
            }
        }
        OutputFormat::Records => {
            for scored in &results.posts {
                println!(
                    r#"post id="{}" title="{}" score="{:.2}" matched="{}""#,
                    escape_quotes(&scored.post.id),
                    escape_quotes(&scored.post.title),
                    scored.relevance,
                    escape_quotes(&scored.matched_tags.join(",")),
                );
            }
        }
    }

    Ok(())
}
