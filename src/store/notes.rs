//! NoteStore: ordered note collection, persistence round-trip, import/export.

use crate::domain::{Note, NoteId};
use crate::store::kv::{KeyValueStore, KvError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Namespaced storage slot holding the whole collection as a JSON array.
pub const STORAGE_KEY: &str = "research.notes.v1";

/// Title given to freshly created notes.
pub const DEFAULT_TITLE: &str = "New note";

/// Default file name for JSON exports.
pub const EXPORT_FILE_NAME: &str = "research-notes.json";

/// Errors that can occur during note store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(#[from] KvError),

    /// The collection could not be serialized.
    #[error("failed to serialize note collection: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An import payload was not valid JSON, or an entry was not note-shaped.
    #[error("invalid import payload: {0}")]
    ImportJson(#[source] serde_json::Error),

    /// An import payload parsed, but the top level was not an array.
    #[error("invalid import payload: expected a JSON array of notes, found {found}")]
    ImportShape { found: &'static str },
}

/// Counts reported back from a merge-on-import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Existing notes overwritten in place (matched by id).
    pub replaced: usize,
    /// Notes appended to the collection.
    pub added: usize,
}

impl ImportSummary {
    /// Total number of incoming entries merged.
    pub fn total(&self) -> usize {
        self.replaced + self.added
    }
}

/// Owns the ordered note collection and its persistence round-trip.
///
/// The collection keeps creation order; edits never resort it. Every
/// mutating operation that the store performs directly (update, delete,
/// import) is followed by a wholesale persist of the collection to the
/// injected [`KeyValueStore`] slot. `create` is the exception: new notes
/// are captured by the next save, matching the editor's dirty-flag flow.
pub struct NoteStore<S: KeyValueStore> {
    kv: S,
    key: String,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Opens the store over the default storage slot.
    ///
    /// A missing slot, a malformed blob, or a backend read failure all
    /// yield an empty collection; read failures are recovered locally and
    /// never surfaced.
    pub fn open(kv: S) -> Self {
        Self::with_key(kv, STORAGE_KEY)
    }

    /// Opens the store over a custom storage slot key.
    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes = load_slot(&kv, &key);
        Self { kv, key, notes }
    }

    /// Returns the notes in creation order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the note with the given id, if present.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Releases the backing key-value store.
    pub fn into_inner(self) -> S {
        self.kv
    }

    /// Appends a new note with a generated id, the default title, empty
    /// content, and the current timestamp; returns a copy of it.
    ///
    /// Does not persist on its own: a fresh note reaches the slot with the
    /// next save (explicit or autosave).
    pub fn create(&mut self) -> Note {
        let note = Note::new(NoteId::generate(), DEFAULT_TITLE, "", Utc::now());
        self.notes.push(note.clone());
        note
    }

    /// Overwrites title and content of the note with the given id,
    /// refreshes its `updated` timestamp, and persists.
    ///
    /// Returns false (and does not persist) when no note has that id.
    pub fn update(&mut self, id: &NoteId, title: &str, content: &str) -> Result<bool, StoreError> {
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return Ok(false);
        };
        note.apply_edit(title, content, Utc::now());
        self.persist()?;
        Ok(true)
    }

    /// Removes the note with the given id and persists.
    ///
    /// Returns false (and does not persist) when no note has that id.
    pub fn delete(&mut self, id: &NoteId) -> Result<bool, StoreError> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id() != id);
        if self.notes.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Merges a JSON import payload into the collection and persists.
    ///
    /// The payload must be a JSON array of note-shaped objects
    /// (`{id?, title?, content?, updated?}`). Entries carrying an id
    /// overwrite any existing note with that id in place (last-in-wins) or
    /// are appended; entries without an id are appended under a freshly
    /// generated id. Missing fields default to empty strings and the Unix
    /// epoch, which keeps repeated merges of the same payload idempotent.
    ///
    /// # Errors
    ///
    /// Returns `ImportJson` for unparsable payloads or entries and
    /// `ImportShape` when the top level is not an array. On any error the
    /// collection is left unmodified.
    pub fn import_merge(&mut self, payload: &str) -> Result<ImportSummary, StoreError> {
        let incoming = parse_import(payload)?;

        let mut index: HashMap<NoteId, usize> = self
            .notes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id().clone(), i))
            .collect();

        let mut summary = ImportSummary {
            replaced: 0,
            added: 0,
        };

        for note in incoming {
            match index.get(note.id()) {
                Some(&slot) => {
                    self.notes[slot] = note;
                    summary.replaced += 1;
                }
                None => {
                    index.insert(note.id().clone(), self.notes.len());
                    self.notes.push(note);
                    summary.added += 1;
                }
            }
        }

        self.persist()?;
        Ok(summary)
    }

    /// Returns the full collection pretty-printed as JSON (2-space indent).
    pub fn export(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.notes).map_err(StoreError::Serialize)
    }

    /// Serializes the collection and writes it to the storage slot,
    /// overwriting prior content.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.notes).map_err(StoreError::Serialize)?;
        self.kv.set(&self.key, &blob)?;
        Ok(())
    }

    /// Filters the collection by a case-insensitive substring match over
    /// title and content, newest first (reverse creation order).
    ///
    /// An empty query yields the full collection in that order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .rev()
            .filter(|n| {
                needle.is_empty()
                    || n.title().to_lowercase().contains(&needle)
                    || n.content().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

fn load_slot<S: KeyValueStore>(kv: &S, key: &str) -> Vec<Note> {
    match kv.get(key) {
        Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_default(),
        Ok(None) | Err(_) => Vec::new(),
    }
}

/// A note-shaped import entry; every field but the id may be missing.
#[derive(Debug, Deserialize)]
struct IncomingNote {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default = "unix_epoch", with = "chrono::serde::ts_milliseconds")]
    updated: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl IncomingNote {
    /// Converts into a Note, generating a fresh id when the entry carried
    /// none (or an empty one).
    fn into_note(self) -> Note {
        let id = self
            .id
            .and_then(|raw| raw.parse::<NoteId>().ok())
            .unwrap_or_else(NoteId::generate);
        Note::new(id, self.title, self.content, self.updated)
    }
}

fn parse_import(payload: &str) -> Result<Vec<Note>, StoreError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(StoreError::ImportJson)?;

    let serde_json::Value::Array(items) = value else {
        return Err(StoreError::ImportShape {
            found: json_type_name(&value),
        });
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<IncomingNote>(item)
                .map(IncomingNote::into_note)
                .map_err(StoreError::ImportJson)
        })
        .collect()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
