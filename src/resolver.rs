//! Theme resolution over injected ports.
//!
//! [`ThemeResolver`] decides which [`ThemeMode`] is active and keeps the
//! rendered appearance and the persisted preference consistent. It owns
//! three ports:
//!
//! - a [`PreferenceStore`] holding the user's explicit choice,
//! - a [`SystemSignal`] reporting the host's color-scheme preference,
//! - a [`ThemeSurface`] whose root nodes carry the dark marker.
//!
//! # Resolution
//!
//! At startup [`ThemeResolver::init_theme`] picks the mode in this order:
//!
//! 1. The stored preference, if it decodes to exactly `"light"` or `"dark"`
//! 2. The system signal, `Dark` only when it positively reports dark
//! 3. `Light` when neither is available
//!
//! When no valid preference was stored, the resolved mode is written back so
//! the next start does not depend on the system signal.
//!
//! # Failure handling
//!
//! No operation returns an error. Theme selection is cosmetic, so storage
//! failures are logged and replaced by the safe default: an unreadable
//! store means "no preference", an unwritable one means the theme lasts for
//! this process only. Ports without an environment (no storage, nothing to
//! render) turn the matching half of each operation into a no-op.

use crate::config::ResolverConfig;
use crate::mode::ThemeMode;
use crate::signal::SystemSignal;
use crate::store::PreferenceStore;
use crate::surface::{RootNode, ThemeSurface};

/// Resolves, applies and persists the active theme.
///
/// # Example
///
/// ```rust
/// use vectorlab_theme::{FixedSignal, MemoryStore, RecordingSurface, RootNode, ThemeMode, ThemeResolver};
///
/// let mut resolver = ThemeResolver::new(MemoryStore::new(), FixedSignal::dark(), RecordingSurface::new());
///
/// assert_eq!(resolver.init_theme(), ThemeMode::Dark);
/// assert!(resolver.surface().has_class(RootNode::Body, "dark"));
///
/// resolver.set_theme(ThemeMode::Light);
/// assert_eq!(resolver.read_stored_preference(), Some(ThemeMode::Light));
/// ```
#[derive(Debug)]
pub struct ThemeResolver<S, P, T> {
    store: S,
    signal: P,
    surface: T,
    config: ResolverConfig,
    current: Option<ThemeMode>,
}

impl<S, P, T> ThemeResolver<S, P, T>
where
    S: PreferenceStore,
    P: SystemSignal,
    T: ThemeSurface,
{
    /// Creates a resolver with the default [`ResolverConfig`].
    pub fn new(store: S, signal: P, surface: T) -> Self {
        Self {
            store,
            signal,
            surface,
            config: ResolverConfig::default(),
            current: None,
        }
    }

    /// Replaces the configuration, returning the resolver for chaining.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    /// Consumes the resolver, handing back its ports.
    pub fn into_parts(self) -> (S, P, T) {
        (self.store, self.signal, self.surface)
    }

    /// The mode most recently applied through this resolver, if any.
    ///
    /// Tracked even when the surface is not renderable, so a headless
    /// resolver still knows which mode it resolved.
    pub fn current(&self) -> Option<ThemeMode> {
        self.current
    }

    /// Reads the persisted preference.
    ///
    /// Returns `None` when the store is unavailable, the key is missing, the
    /// read fails, or the stored value is anything other than the exact
    /// strings `"light"` and `"dark"`.
    pub fn read_stored_preference(&self) -> Option<ThemeMode> {
        if !self.store.is_available() {
            return None;
        }

        match self.store.get(&self.config.storage_key) {
            Ok(Some(value)) => {
                let mode = ThemeMode::decode(&value);
                if mode.is_none() {
                    tracing::debug!(%value, "ignoring unrecognized stored theme");
                }
                mode
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored theme preference");
                None
            }
        }
    }

    /// Returns `Dark` if the host reports a dark color-scheme preference,
    /// `Light` otherwise, including when there is no host to ask.
    pub fn detect_system_preference(&self) -> ThemeMode {
        match self.signal.prefers_dark() {
            Some(true) => ThemeMode::Dark,
            Some(false) | None => ThemeMode::Light,
        }
    }

    /// Marks both root nodes dark iff `mode` is `Dark`. Idempotent.
    ///
    /// Does nothing to the surface when it is not renderable. Never touches
    /// the store.
    pub fn apply_theme(&mut self, mode: ThemeMode) {
        self.current = Some(mode);

        if !self.surface.is_renderable() {
            return;
        }

        for node in RootNode::ALL {
            self.surface
                .set_class(node, &self.config.dark_class, mode.is_dark());
        }
        tracing::trace!(%mode, class = %self.config.dark_class, "applied theme");
    }

    /// Switches to `mode` explicitly: applies it, then persists it.
    ///
    /// The surface is updated before the store so that a failed write still
    /// leaves the chosen theme visible for the rest of the process.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.apply_theme(mode);
        self.persist(mode);
    }

    /// Resolves the startup theme, applies it and returns it.
    ///
    /// Call once per process before the user can interact with the toggle.
    /// A valid stored preference wins over the system signal and is left
    /// untouched; otherwise the system-derived mode is applied and written
    /// back on a best-effort basis.
    pub fn init_theme(&mut self) -> ThemeMode {
        let stored = self.read_stored_preference();
        let resolved = match stored {
            Some(mode) => {
                tracing::debug!(%mode, "using stored theme preference");
                mode
            }
            None => {
                let mode = self.detect_system_preference();
                tracing::debug!(%mode, "no stored theme preference, following system");
                mode
            }
        };

        self.apply_theme(resolved);

        if stored.is_none() {
            self.persist(resolved);
        }

        resolved
    }

    /// Switches to the opposite of the current mode and returns it.
    ///
    /// When nothing has been applied yet the startup resolution runs first,
    /// so the toggle always flips what the user is actually seeing.
    pub fn toggle(&mut self) -> ThemeMode {
        let active = match self.current {
            Some(mode) => mode,
            None => self.init_theme(),
        };
        let next = active.toggled();
        self.set_theme(next);
        next
    }

    fn persist(&mut self, mode: ThemeMode) -> bool {
        if !self.store.is_available() {
            return false;
        }

        match self.store.set(&self.config.storage_key, mode.as_str()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%mode, error = %err, "could not persist theme preference");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FixedSignal;
    use crate::store::{MemoryStore, NullStore};
    use crate::surface::{Headless, RecordingSurface};

    fn resolver(
        store: MemoryStore,
        signal: FixedSignal,
    ) -> ThemeResolver<MemoryStore, FixedSignal, RecordingSurface> {
        ThemeResolver::new(store, signal, RecordingSurface::new())
    }

    #[test]
    fn test_stored_preference_requires_available_store() {
        let r = resolver(
            MemoryStore::unavailable().with("vectorlab-theme", "dark"),
            FixedSignal::light(),
        );
        assert_eq!(r.read_stored_preference(), None);
    }

    #[test]
    fn test_custom_config_changes_key_and_class() {
        let config = ResolverConfig::default()
            .with_storage_key("custom")
            .with_dark_class("night");
        let mut r = resolver(MemoryStore::new(), FixedSignal::dark()).with_config(config);

        r.init_theme();

        assert_eq!(r.store().get("custom").unwrap().as_deref(), Some("dark"));
        assert_eq!(r.store().get("vectorlab-theme").unwrap(), None);
        assert!(r.surface().has_class(RootNode::Document, "night"));
        assert!(!r.surface().has_class(RootNode::Document, "dark"));
    }

    #[test]
    fn test_headless_apply_tracks_current_without_rendering() {
        let mut r = ThemeResolver::new(NullStore, FixedSignal::unavailable(), Headless);
        assert_eq!(r.current(), None);
        r.apply_theme(ThemeMode::Dark);
        assert_eq!(r.current(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_no_environment_init_defaults_to_light() {
        let mut r = ThemeResolver::new(NullStore, FixedSignal::unavailable(), Headless);
        assert_eq!(r.init_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_set_theme_with_unwritable_store_still_applies() {
        let mut r = resolver(
            MemoryStore::new().with("vectorlab-theme", "light").read_only(),
            FixedSignal::light(),
        );

        r.set_theme(ThemeMode::Dark);

        assert!(r.surface().has_class(RootNode::Body, "dark"));
        assert_eq!(r.read_stored_preference(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_toggle_before_init_flips_resolved_mode() {
        let mut r = resolver(MemoryStore::new(), FixedSignal::dark());
        assert_eq!(r.toggle(), ThemeMode::Light);
        assert_eq!(r.read_stored_preference(), Some(ThemeMode::Light));
        assert!(!r.surface().has_class(RootNode::Document, "dark"));
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let mut r = resolver(MemoryStore::new(), FixedSignal::light());
        let start = r.init_theme();
        r.toggle();
        assert_eq!(r.toggle(), start);
        assert_eq!(r.current(), Some(start));
    }
}
