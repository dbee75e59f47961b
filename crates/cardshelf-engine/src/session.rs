//! Caller-owned browsing-session state.
//!
//! The engine itself is stateless; the per-category page cursors and the
//! cache-staleness bookkeeping that the original dashboard scattered across
//! UI globals live here as one explicit object the calling layer owns and
//! passes in.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Mutable state for one browsing session: a page cursor per category plus
/// the timestamp of the last collection load.
///
/// Cursors are keyed case-insensitively by category, so the `"Pokemon"` tab
/// and the `"pokemon"` tab are the same cursor, and advancing one
/// category's page never affects another's. Cursor values are raw requests;
/// clamping to the real page count happens in [`crate::paginate`] at view
/// time, which also absorbs a collection shrinking underneath a cursor.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    cursors: HashMap<String, usize>,
    loaded_at: Option<DateTime<Utc>>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Current page request for a category; 1 when never set.
    #[must_use]
    pub fn page_for(&self, category: &str) -> usize {
        self.cursors
            .get(&cursor_key(category))
            .copied()
            .unwrap_or(1)
    }

    /// Records a page request for a category. Zero is stored as 1.
    pub fn set_page(&mut self, category: &str, page: usize) {
        self.cursors.insert(cursor_key(category), page.max(1));
    }

    /// Marks a fresh collection load at `now`.
    pub fn mark_loaded(&mut self, now: DateTime<Utc>) {
        self.loaded_at = Some(now);
    }

    /// When the current collection was loaded, if ever.
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Whether the caller should reload before serving views. A session
    /// that never loaded is always stale.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl_secs: u64) -> bool {
        match self.loaded_at {
            None => true,
            Some(loaded_at) => {
                let age = now.signed_duration_since(loaded_at).num_seconds();
                // A negative age means the clock moved backwards; reload.
                u64::try_from(age).map_or(true, |secs| secs >= ttl_secs)
            }
        }
    }
}

fn cursor_key(category: &str) -> String {
    category.trim().to_lowercase()
}
