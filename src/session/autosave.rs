//! Periodic flush of dirty edits.

use crate::session::{EditorSession, View};
use crate::store::{KeyValueStore, StoreError};
use std::time::{Duration, Instant};

/// Fixed autosave check period.
pub const AUTOSAVE_PERIOD: Duration = Duration::from_secs(2);

/// Recurring save-when-dirty ticker.
///
/// `tick` is cheap to call from any polling loop: it only acts once per
/// period, and then only when the session has unsaved edits. A tick that
/// interleaves with an explicit save converges on the same last-write-wins
/// update path, so ordering between the two never matters.
pub struct Autosave {
    period: Duration,
    last: Instant,
}

impl Autosave {
    /// Creates a ticker with the standard 2-second period.
    pub fn new() -> Self {
        Self::with_period(AUTOSAVE_PERIOD)
    }

    /// Creates a ticker with a custom period.
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            last: Instant::now(),
        }
    }

    /// Saves the session's dirty edits when the period has elapsed.
    ///
    /// Returns true when a save actually happened.
    pub fn tick<S, V>(
        &mut self,
        session: &mut EditorSession<S>,
        view: &mut V,
    ) -> Result<bool, StoreError>
    where
        S: KeyValueStore,
        V: View,
    {
        if self.last.elapsed() < self.period {
            return Ok(false);
        }
        self.last = Instant::now();

        if !session.is_dirty() {
            return Ok(false);
        }
        session.save(view)
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new()
    }
}
