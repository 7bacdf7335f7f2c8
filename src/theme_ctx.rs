//! Theme context
//!
//! Session-wide light/dark state. The provider is created once at startup
//! and cloned into every view that needs the theme; all clones observe the
//! same value. `toggle_theme` is the only mutator and persists the result.

use crate::storage::{self, SharedStore, KEY_THEME};
use crate::types::ThemeMode;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::info;

/// Shared handle to the current theme
#[derive(Clone)]
pub struct ThemeContext {
    mode: Rc<Cell<ThemeMode>>,
    store: SharedStore,
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("mode", &self.mode.get())
            .finish_non_exhaustive()
    }
}

impl ThemeContext {
    /// Create the provider, seeding the theme from storage
    pub fn provide(store: SharedStore) -> Self {
        let mode = ThemeMode::from_stored(storage::read(&store, KEY_THEME).as_deref());
        Self {
            mode: Rc::new(Cell::new(mode)),
            store,
        }
    }

    /// Current theme
    pub fn theme(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Flip light/dark and persist the new value
    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.mode.get().toggled();
        self.mode.set(next);
        storage::write(&self.store, KEY_THEME, next.as_str());
        info!(theme = next.as_str(), "Theme toggled");
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, FileStore, KeyValueStore, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_light() {
        let ctx = ThemeContext::provide(shared(MemoryStore::default()));
        assert_eq!(ctx.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_reads_stored_theme() {
        let ctx = ThemeContext::provide(shared(MemoryStore::with(&[("theme", "dark")])));
        assert_eq!(ctx.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = ThemeContext::provide(shared(MemoryStore::default()));
        let consumer = ctx.clone();

        consumer.toggle_theme();
        assert_eq!(ctx.theme(), ThemeMode::Dark);

        ctx.toggle_theme();
        assert_eq!(consumer.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = shared(MemoryStore::default());
        let ctx = ThemeContext::provide(store.clone());

        ctx.toggle_theme();
        assert_eq!(store.borrow().get("theme").unwrap().as_deref(), Some("dark"));

        ctx.toggle_theme();
        assert_eq!(store.borrow().get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let ctx = ThemeContext::provide(shared(FileStore::open(&path)));
        assert_eq!(ctx.toggle_theme(), ThemeMode::Dark);
        drop(ctx);

        let reloaded = ThemeContext::provide(shared(FileStore::open(&path)));
        assert_eq!(reloaded.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_survives_broken_store() {
        let ctx = ThemeContext::provide(shared(MemoryStore::broken()));
        assert_eq!(ctx.theme(), ThemeMode::Light);
        assert_eq!(ctx.toggle_theme(), ThemeMode::Dark);
        assert_eq!(ctx.theme(), ThemeMode::Dark);
    }
}
