//! # VectorLab theme - light/dark preference resolution
//!
//! `vectorlab-theme` decides which color theme a VectorLab client shows,
//! applies it to the page roots and remembers the user's explicit choice.
//!
//! ## Core concepts
//!
//! - [`ThemeMode`]: `Light` or `Dark`, stored as `"light"` / `"dark"`
//! - [`ThemeResolver`]: resolution, application and persistence
//! - [`PreferenceStore`]: durable key/value storage ([`MemoryStore`], [`FileStore`], [`NullStore`])
//! - [`SystemSignal`]: host dark-scheme preference ([`OsSignal`], [`FixedSignal`])
//! - [`ThemeSurface`]: root nodes carrying the dark class ([`RecordingSurface`], [`Headless`])
//!
//! With the `web` feature on `wasm32`, the [`web`] module provides adapters
//! for `localStorage`, `matchMedia` and the document class lists.
//!
//! ## Quick start
//!
//! ```rust
//! use vectorlab_theme::{FixedSignal, MemoryStore, RecordingSurface, ThemeMode, ThemeResolver};
//!
//! let store = MemoryStore::new().with("vectorlab-theme", "dark");
//! let mut resolver = ThemeResolver::new(store, FixedSignal::light(), RecordingSurface::new());
//!
//! // A stored choice wins over the system signal.
//! assert_eq!(resolver.init_theme(), ThemeMode::Dark);
//!
//! // The toggle control flips and persists.
//! assert_eq!(resolver.toggle(), ThemeMode::Light);
//! assert_eq!(resolver.read_stored_preference(), Some(ThemeMode::Light));
//! ```
//!
//! ## Failure model
//!
//! Nothing here returns an error to the caller. Storage problems surface as
//! [`PersistenceUnavailable`] inside store adapters and are logged through
//! `tracing`, then replaced by a safe default.

mod config;
mod mode;
mod resolver;
mod signal;
pub mod store;
mod surface;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use config::{ResolverConfig, DEFAULT_DARK_CLASS, DEFAULT_STORAGE_KEY};
pub use mode::{ParseThemeModeError, ThemeMode};
pub use resolver::ThemeResolver;
pub use signal::{FixedSignal, OsSignal, SystemSignal};
pub use store::{FileStore, MemoryStore, NullStore, PersistenceUnavailable, PreferenceStore};
pub use surface::{Headless, RecordingSurface, RootNode, ThemeSurface};
