//! Note resolution utilities.

use anyhow::{Result, bail};

use crate::domain::Note;

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Resolves a note identifier against the collection.
///
/// Resolution order:
/// 1. Exact id match
/// 2. Id prefix match
/// 3. Exact title match (case-insensitive)
///
/// Returns `Unique` if exactly one note matches, `Ambiguous` if multiple
/// match, or `NotFound` if none do.
pub fn resolve_note<'a>(notes: &'a [Note], identifier: &str) -> ResolveResult<'a> {
    let identifier = identifier.trim();

    if let Some(note) = notes.iter().find(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(note);
    }

    let mut candidates: Vec<&Note> = notes
        .iter()
        .filter(|n| n.id().as_str().starts_with(identifier))
        .collect();

    // Id prefixes are the most precise; a single hit wins outright.
    if candidates.len() == 1 {
        return ResolveResult::Unique(candidates[0]);
    }

    let lowered = identifier.to_lowercase();
    candidates.extend(
        notes
            .iter()
            .filter(|n| n.title().to_lowercase() == lowered),
    );

    // Deduplicate by id, keeping first occurrence.
    let mut seen = Vec::new();
    candidates.retain(|n| {
        if seen.contains(&n.id()) {
            false
        } else {
            seen.push(n.id());
            true
        }
    });

    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates[0]),
        _ => ResolveResult::Ambiguous(candidates),
    }
}

/// Resolves to a unique note or fails with a helpful message.
pub fn resolve_required<'a>(notes: &'a [Note], identifier: &str) -> Result<&'a Note> {
    match resolve_note(notes, identifier) {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(matches) => {
            print_ambiguous_notes(identifier, &matches);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Prints detailed information about ambiguous notes to help distinguish them.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id().prefix(), note.label());
    }
    eprintln!();
    eprintln!("Use the id prefix to specify which note you mean.");
}
