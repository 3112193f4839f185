//! Note persistence: key-value substrate and the note store built on it.

mod kv;
mod notes;

pub use kv::{FileStore, KeyValueStore, KvError, MemoryStore};
pub use notes::{
    DEFAULT_TITLE, EXPORT_FILE_NAME, ImportSummary, NoteStore, STORAGE_KEY, StoreError,
};
