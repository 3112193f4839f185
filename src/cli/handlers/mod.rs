//! Command handlers for the CLI.

mod completions;
mod edit;
mod list;
mod new;
mod remove;
mod resolve;
mod show;
mod transfer;


use std::path::Path;

use crate::store::{FileStore, NoteStore};

// Re-export public items
pub use completions::handle_completions;
pub use edit::handle_edit;
pub use list::{handle_list, handle_search};
pub use new::handle_new;
pub use remove::handle_rm;
pub use resolve::{ResolveResult, resolve_note, resolve_required};
pub use show::{handle_preview, handle_show};
pub use transfer::{handle_export, handle_import};

// Re-export for tests
#[cfg(test)]
pub(crate) use edit::{EditorLauncher, compose_draft, handle_edit_impl, parse_draft};

/// Opens the note store over the file-backed slot in `data_dir`.
pub(crate) fn open_store(data_dir: &Path) -> NoteStore<FileStore> {
    NoteStore::open(FileStore::open(data_dir))
}
