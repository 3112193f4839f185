//! EditorSession: selection and dirty-flag coordination over a NoteStore.

use crate::domain::{Note, NoteId};
use crate::session::View;
use crate::store::{KeyValueStore, NoteStore, StoreError};

/// Tracks the currently selected note and unsaved-edit state, and
/// coordinates save/select/delete/new transitions against the store.
///
/// The session references the selected note by id only; draft text lives
/// in the [`View`] and is reconciled into the store on save. The state
/// machine collapses to `current: Option<NoteId>` plus a dirty flag.
pub struct EditorSession<S: KeyValueStore> {
    store: NoteStore<S>,
    current: Option<NoteId>,
    dirty: bool,
}

impl<S: KeyValueStore> EditorSession<S> {
    /// Opens a session over the store, selecting the most recently created
    /// note (the last in collection order) when one exists.
    pub fn open<V: View>(store: NoteStore<S>, view: &mut V) -> Self {
        let current = store.notes().last().map(|n| n.id().clone());
        let mut session = Self {
            store,
            current,
            dirty: false,
        };
        session.render_list(view);
        session.load_current(view);
        session
    }

    /// Returns the underlying note store.
    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    /// Returns the underlying note store mutably.
    ///
    /// Host applications route store-level operations (import, bulk
    /// deletes) through here; the session re-resolves its selection by id
    /// on the next transition, so a note vanishing underneath it degrades
    /// to a no-op save.
    pub fn store_mut(&mut self) -> &mut NoteStore<S> {
        &mut self.store
    }

    /// Consumes the session, releasing the store.
    pub fn into_store(self) -> NoteStore<S> {
        self.store
    }

    /// Returns the id of the selected note, if any.
    pub fn current_id(&self) -> Option<&NoteId> {
        self.current.as_ref()
    }

    /// Returns true when the drafts have unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flags the drafts as edited since the last save.
    ///
    /// Invoked on every draft change; cleared by a successful save.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Selects a note, flushing unsaved edits to the previous selection
    /// first so switching never silently drops them.
    ///
    /// Loads the selected note's fields into the view drafts and clears
    /// the dirty flag.
    pub fn select_note<V: View>(&mut self, id: NoteId, view: &mut V) -> Result<(), StoreError> {
        if self.dirty {
            self.save(view)?;
        }
        self.current = Some(id);
        self.render_list(view);
        self.load_current(view);
        self.dirty = false;
        Ok(())
    }

    /// Creates a note and selects it.
    ///
    /// The session is marked dirty so the new note (default content
    /// included) is captured by the next save or autosave; `create` itself
    /// does not persist.
    pub fn new_note<V: View>(&mut self, view: &mut V) -> Note {
        let note = self.store.create();
        self.current = Some(note.id().clone());
        self.render_list(view);
        self.load_current(view);
        self.dirty = true;
        note
    }

    /// Writes the view drafts back to the selected note and persists.
    ///
    /// No-op (returning false) when nothing is selected or the note no
    /// longer exists; the dirty flag is cleared only on an actual save.
    pub fn save<V: View>(&mut self, view: &mut V) -> Result<bool, StoreError> {
        let Some(id) = self.current.clone() else {
            return Ok(false);
        };
        let saved = self
            .store
            .update(&id, &view.draft_title(), &view.draft_content())?;
        if !saved {
            return Ok(false);
        }
        self.dirty = false;
        self.render_list(view);
        Ok(true)
    }

    /// Deletes the selected note, then selects the most recently created
    /// remaining note, or nothing when the collection is empty.
    ///
    /// Drafts are always reloaded afterwards, so the dirty flag is
    /// cleared: the view now mirrors the store exactly.
    pub fn delete_current<V: View>(&mut self, view: &mut V) -> Result<bool, StoreError> {
        let Some(id) = self.current.clone() else {
            return Ok(false);
        };
        self.store.delete(&id)?;
        self.current = self.store.notes().last().map(|n| n.id().clone());
        self.render_list(view);
        self.load_current(view);
        self.dirty = false;
        Ok(true)
    }

    fn load_current<V: View>(&self, view: &mut V) {
        match self.current.as_ref().and_then(|id| self.store.get(id)) {
            Some(note) => view.set_draft_fields(note.title(), note.content()),
            None => view.set_draft_fields("", ""),
        }
    }

    fn render_list<V: View>(&self, view: &mut V) {
        view.render_list_items(self.store.notes(), self.current.as_ref());
    }
}
