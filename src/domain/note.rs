//! Note record as stored in the persistence slot.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback label for notes with neither title nor content.
pub const UNTITLED_LABEL: &str = "(untitled)";

/// A single note.
///
/// Notes are plain records: an opaque unique id, free-form title and
/// content (both may be empty), and the time of the last save. The whole
/// collection is serialized wholesale as a JSON array, so the wire shape
/// here is the storage format.
///
/// `updated` travels as milliseconds since the Unix epoch, matching the
/// blob layout of earlier versions of the storage slot. Imported objects
/// may omit `title`, `content`, or `updated`; those default to the empty
/// string and the epoch respectively. The id is always required.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let note = Note::new(NoteId::generate(), "API Design", "", Utc::now());
/// assert_eq!(note.title(), "API Design");
/// assert_eq!(note.label(), "API Design");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
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

impl Note {
    /// Creates a note from its parts. Empty title and content are valid.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            updated,
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was last saved.
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Returns the display label for list rendering.
    ///
    /// The title when non-empty, else the first 60 characters of the
    /// content, else `(untitled)`.
    pub fn label(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        if !self.content.is_empty() {
            return self.content.chars().take(60).collect();
        }
        UNTITLED_LABEL.to_string()
    }

    /// Overwrites title and content and refreshes the save timestamp.
    pub(crate) fn apply_edit(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        updated: DateTime<Utc>,
    ) {
        self.title = title.into();
        self.content = content.into();
        self.updated = updated;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label(), self.id.prefix())
    }
}
