//! View boundary between the editor session and whatever renders it.

use crate::domain::{Note, NoteId};

/// External collaborator that owns the editable draft fields and the
/// rendered note list.
///
/// The session never keeps its own copy of the draft text; it reads the
/// drafts from the view on save and pushes store state into the view on
/// selection changes. The view receives the full collection on re-render
/// and applies its own filtering/highlighting.
pub trait View {
    /// Re-renders the note list, flagging the selected note by id.
    fn render_list_items(&mut self, notes: &[Note], selected: Option<&NoteId>);

    /// Returns the draft title as currently edited.
    fn draft_title(&self) -> String;

    /// Returns the draft content as currently edited.
    fn draft_content(&self) -> String;

    /// Replaces both draft fields.
    fn set_draft_fields(&mut self, title: &str, content: &str);
}
