//! Builder for test notes with sensible defaults.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use jot::domain::{Note, NoteId};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an id and a current timestamp, with a fluent
/// API for overriding fields.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    title: String,
    content: String,
    updated: DateTime<Utc>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::generate(),
            title: title.into(),
            content: String::new(),
            updated: Utc::now(),
        }
    }

    /// Sets an explicit id for the note.
    pub fn id(mut self, id: impl AsRef<str>) -> Self {
        self.id = id.as_ref().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the note content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets an explicit updated timestamp.
    pub fn updated(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = updated;
        self
    }

    /// Converts the builder into a Note.
    pub fn to_note(&self) -> Note {
        Note::new(
            self.id.clone(),
            self.title.clone(),
            self.content.clone(),
            self.updated,
        )
    }
}
