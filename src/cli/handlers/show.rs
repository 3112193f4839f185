//! Show and preview command handlers.

use anyhow::Result;
use std::path::Path;

use super::open_store;
use super::resolve::resolve_required;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{PreviewArgs, ShowArgs};
use crate::render;

pub fn handle_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir);
    let note = resolve_required(store.notes(), &args.note)?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.label());
            println!();
            println!(
                "ID: {}  Updated: {}",
                note.id(),
                note.updated().format("%Y-%m-%d %H:%M")
            );
            println!();
            if !note.content().is_empty() {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(note);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Ids => {
            println!("{}", note.id());
        }
    }

    Ok(())
}

pub fn handle_preview(args: &PreviewArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir);
    let note = resolve_required(store.notes(), &args.note)?;

    println!("{}", render::render(note.content()));
    Ok(())
}
