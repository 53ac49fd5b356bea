//! Browser adapters for the three ports, built on `web-sys`.
//!
//! Every adapter degrades instead of failing when the page lacks the
//! facility it wraps: no `window` means no storage, no signal and nothing to
//! render, which is exactly the server-side rendering situation.

use web_sys::{Document, Storage, Window};

use crate::signal::SystemSignal;
use crate::store::{PersistenceUnavailable, PreferenceStore};
use crate::surface::{RootNode, ThemeSurface};
use crate::ThemeResolver;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Option<Window> {
    web_sys::window()
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Looks up local storage. Access can throw in restricted contexts, in
    /// which case the store reports itself unavailable.
    pub fn new() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorage {
    fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn get(&self, key: &str) -> Result<Option<String>, PersistenceUnavailable> {
        let storage = self
            .storage
            .as_ref()
            .ok_or(PersistenceUnavailable::NoStorage)?;
        storage
            .get_item(key)
            .map_err(|err| PersistenceUnavailable::rejected(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceUnavailable> {
        let storage = self
            .storage
            .as_ref()
            .ok_or(PersistenceUnavailable::NoStorage)?;
        storage
            .set_item(key, value)
            .map_err(|err| PersistenceUnavailable::rejected(format!("{err:?}")))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQuerySignal;

impl SystemSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> Option<bool> {
        let query = window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
        Some(query.matches())
    }
}

/// The page's `<html>` and `<body>` class lists.
#[derive(Debug, Clone)]
pub struct DocumentSurface {
    document: Option<Document>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self {
            document: window().and_then(|w| w.document()),
        }
    }
}

impl Default for DocumentSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSurface for DocumentSurface {
    fn is_renderable(&self) -> bool {
        self.document.is_some()
    }

    fn set_class(&mut self, node: RootNode, class: &str, present: bool) {
        let Some(document) = &self.document else {
            return;
        };
        let element: Option<web_sys::Element> = match node {
            RootNode::Document => document.document_element(),
            RootNode::Body => document.body().map(Into::into),
        };
        if let Some(element) = element {
            if let Err(err) = element.class_list().toggle_with_force(class, present) {
                tracing::warn!(?node, error = ?err, "could not update root class list");
            }
        }
    }
}

/// A resolver wired to the current page.
pub type BrowserThemeResolver = ThemeResolver<LocalStorage, MediaQuerySignal, DocumentSurface>;

/// Builds a [`BrowserThemeResolver`] for the current page.
pub fn browser_resolver() -> BrowserThemeResolver {
    ThemeResolver::new(
        LocalStorage::new(),
        MediaQuerySignal,
        DocumentSurface::new(),
    )
}
