//! New note command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::NewArgs;

pub fn handle_new(args: &NewArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir);
    let note = store.create();

    // A one-shot command has no later save to capture the note, so flush
    // immediately: through update when a title was given, explicitly
    // otherwise.
    match &args.title {
        Some(title) => {
            store
                .update(note.id(), title, "")
                .with_context(|| "failed to save new note")?;
        }
        None => {
            store.persist().with_context(|| "failed to save new note")?;
        }
    }

    let saved = store.get(note.id()).expect("freshly created note exists");
    println!("Created: {}", saved);
    Ok(())
}
