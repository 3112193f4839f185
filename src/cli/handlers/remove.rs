//! Delete command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use super::resolve::resolve_required;
use crate::cli::RmArgs;

pub fn handle_rm(args: &RmArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir);
    let note = resolve_required(store.notes(), &args.note)?;
    let id = note.id().clone();
    let display = note.to_string();

    store
        .delete(&id)
        .with_context(|| format!("failed to delete note: {}", display))?;

    println!("Deleted: {}", display);
    Ok(())
}
