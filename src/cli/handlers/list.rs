//! List and search command handlers.

use anyhow::Result;
use std::path::Path;

use super::open_store;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::Note;

pub fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let query = args.query.as_deref().unwrap_or("");
    list_filtered(query, args.format, data_dir)
}

pub fn handle_search(args: &SearchArgs, data_dir: &Path) -> Result<()> {
    list_filtered(&args.query, args.format, data_dir)
}

/// Filters the collection and prints it newest-first.
fn list_filtered(query: &str, format: OutputFormat, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir);
    let hits = store.search(query);

    match format {
        OutputFormat::Human => {
            if hits.is_empty() {
                if query.is_empty() {
                    println!("No notes yet.");
                } else {
                    println!("No matching notes found.");
                }
            } else {
                for note in &hits {
                    println!(
                        "{:<10} {}  ({})",
                        note.id().prefix(),
                        note.label(),
                        note.updated().format("%Y-%m-%d %H:%M")
                    );
                }
                println!();
                println!("{} note(s)", hits.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = hits.iter().map(|n| to_listing(n)).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Ids => {
            for note in &hits {
                println!("{}", note.id());
            }
        }
    }

    Ok(())
}

fn to_listing(note: &Note) -> NoteListing {
    NoteListing {
        id: note.id().to_string(),
        label: note.label(),
        title: note.title().to_string(),
        updated: note.updated().to_rfc3339(),
    }
}
