//! Export and import command handlers.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::open_store;
use crate::cli::{ExportArgs, ImportArgs};
use crate::store::{EXPORT_FILE_NAME, STORAGE_KEY};

pub fn handle_export(args: &ExportArgs, data_dir: &Path, verbose: bool) -> Result<()> {
    let store = open_store(data_dir);
    let json = store.export().with_context(|| "failed to export notes")?;

    if args.stdout {
        println!("{}", json);
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    std::fs::write(&path, &json)
        .with_context(|| format!("failed to write export file: {}", path.display()))?;

    println!("Exported {} note(s) to {}", store.len(), path.display());
    if verbose {
        println!("  slot: {}", data_dir.join(STORAGE_KEY).display());
    }
    Ok(())
}

pub fn handle_import(args: &ImportArgs, data_dir: &Path, verbose: bool) -> Result<()> {
    let payload = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read import file: {}", args.file.display()))?;

    let mut store = open_store(data_dir);
    let summary = store
        .import_merge(&payload)
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    println!(
        "Imported {} note(s) ({} added, {} replaced)",
        summary.total(),
        summary.added,
        summary.replaced
    );
    if verbose {
        println!("  collection now holds {} note(s)", store.len());
    }
    Ok(())
}
