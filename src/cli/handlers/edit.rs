//! Edit command handler: external editor round-trip with autosave.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Child, Command};
use std::time::Duration;

use super::open_store;
use super::resolve::resolve_required;
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::domain::{Note, NoteId};
use crate::session::{Autosave, EditorSession, View};

/// How often the watcher re-reads the draft file while the editor runs.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Trait for launching an editor (allows mocking in tests).
///
/// The child handle is returned rather than awaited so the caller can keep
/// polling the draft file while the editor is open.
pub(crate) trait EditorLauncher {
    fn launch(&self, path: &Path) -> Result<Child>;
}

/// View backed by the draft file handed to the external editor.
///
/// Draft format: the title on the first line, a blank separator line, then
/// the content.
#[derive(Default)]
struct FileView {
    title: String,
    content: String,
}

impl View for FileView {
    fn render_list_items(&mut self, _notes: &[Note], _selected: Option<&NoteId>) {
        // The edit flow has no list pane.
    }

    fn draft_title(&self) -> String {
        self.title.clone()
    }

    fn draft_content(&self) -> String {
        self.content.clone()
    }

    fn set_draft_fields(&mut self, title: &str, content: &str) {
        self.title = title.to_string();
        self.content = content.to_string();
    }
}

/// Serializes draft fields into the draft-file format.
pub(crate) fn compose_draft(title: &str, content: &str) -> String {
    format!("{title}\n\n{content}")
}

/// Splits a draft file back into (title, content).
pub(crate) fn parse_draft(text: &str) -> (String, String) {
    match text.split_once('\n') {
        None => (text.to_string(), String::new()),
        Some((title, rest)) => {
            let content = rest.strip_prefix('\n').unwrap_or(rest);
            (title.to_string(), content.to_string())
        }
    }
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    args: &EditArgs,
    data_dir: &Path,
    editor: &E,
) -> Result<()> {
    let store = open_store(data_dir);
    let id = resolve_required(store.notes(), &args.note)?.id().clone();

    let mut view = FileView::default();
    let mut session = EditorSession::open(store, &mut view);
    session.select_note(id.clone(), &mut view)?;

    let scratch = tempfile::Builder::new()
        .prefix("jot-edit-")
        .tempdir()
        .with_context(|| "failed to create draft directory")?;
    let draft_path = scratch.path().join("draft.txt");
    std::fs::write(
        &draft_path,
        compose_draft(&view.draft_title(), &view.draft_content()),
    )
    .with_context(|| format!("failed to write draft file: {}", draft_path.display()))?;

    let mut child = editor.launch(&draft_path)?;
    let mut autosave = Autosave::new();
    let mut saves = 0usize;

    // Watch the draft while the editor runs; the autosave ticker flushes
    // dirty edits every couple of seconds so a crash mid-edit loses at
    // most one period's worth of typing.
    loop {
        let finished = child
            .try_wait()
            .with_context(|| "failed to poll editor process")?
            .is_some();

        sync_draft(&draft_path, &mut view, &mut session)?;

        if finished {
            break;
        }
        if autosave.tick(&mut session, &mut view)? {
            saves += 1;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    if session.is_dirty() && session.save(&mut view)? {
        saves += 1;
    }

    let store = session.into_store();
    match store.get(&id) {
        Some(note) if saves > 0 => println!("Edited: {}", note),
        Some(note) => println!("No changes: {}", note),
        None => println!("Note was deleted while editing."),
    }
    Ok(())
}

/// Re-reads the draft file and marks the session dirty when it changed.
fn sync_draft<S: crate::store::KeyValueStore>(
    path: &Path,
    view: &mut FileView,
    session: &mut EditorSession<S>,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read draft file: {}", path.display()))?;
    let (title, content) = parse_draft(&text);

    if title != view.title || content != view.content {
        view.set_draft_fields(&title, &content);
        session.mark_dirty();
    }
    Ok(())
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path, config: &Config) -> Result<()> {
    struct RealEditor<'a>(&'a Config);

    impl EditorLauncher for RealEditor<'_> {
        fn launch(&self, path: &Path) -> Result<Child> {
            let editor = self.0.editor();

            // The editor command may include arguments ("code --wait").
            let parts: Vec<&str> = editor.split_whitespace().collect();
            let Some((cmd, args)) = parts.split_first() else {
                bail!("editor command is empty");
            };

            Command::new(cmd)
                .args(args)
                .arg(path)
                .spawn()
                .with_context(|| format!("failed to launch editor '{}'", editor))
        }
    }

    handle_edit_impl(args, data_dir, &RealEditor(config))
}
