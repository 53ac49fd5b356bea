//! Root presentation targets that carry the applied theme.
//!
//! A browser page exposes two roots, the document element and the body,
//! each with a class list. The resolver marks both with the dark class when
//! the dark theme is active and clears it otherwise.

use std::collections::BTreeSet;

/// One of the two root-level nodes the theme marker is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RootNode {
    /// The top-level document element (`<html>`).
    Document,
    /// The body element.
    Body,
}

impl RootNode {
    pub const ALL: [RootNode; 2] = [RootNode::Document, RootNode::Body];
}

/// The styling port.
pub trait ThemeSurface {
    /// Reports whether there is anything to render to.
    ///
    /// When this returns `false`, applying a theme is a no-op.
    fn is_renderable(&self) -> bool {
        true
    }

    /// Adds `class` to `node` when `present` is true, removes it otherwise.
    fn set_class(&mut self, node: RootNode, class: &str, present: bool);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &mut T {
    fn is_renderable(&self) -> bool {
        (**self).is_renderable()
    }

    fn set_class(&mut self, node: RootNode, class: &str, present: bool) {
        (**self).set_class(node, class, present)
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for Box<T> {
    fn is_renderable(&self) -> bool {
        (**self).is_renderable()
    }

    fn set_class(&mut self, node: RootNode, class: &str, present: bool) {
        (**self).set_class(node, class, present)
    }
}

/// A surface that keeps each root's class set in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    document: BTreeSet<String>,
    body: BTreeSet<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the classes currently set on `node`.
    pub fn classes(&self, node: RootNode) -> &BTreeSet<String> {
        match node {
            RootNode::Document => &self.document,
            RootNode::Body => &self.body,
        }
    }

    pub fn has_class(&self, node: RootNode, class: &str) -> bool {
        self.classes(node).contains(class)
    }
}

impl ThemeSurface for RecordingSurface {
    fn set_class(&mut self, node: RootNode, class: &str, present: bool) {
        let classes = match node {
            RootNode::Document => &mut self.document,
            RootNode::Body => &mut self.body,
        };
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

/// A surface for environments with nothing to render to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl ThemeSurface for Headless {
    fn is_renderable(&self) -> bool {
        false
    }

    fn set_class(&mut self, _node: RootNode, _class: &str, _present: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_tracks_nodes_independently() {
        let mut surface = RecordingSurface::new();
        surface.set_class(RootNode::Body, "dark", true);

        assert!(surface.has_class(RootNode::Body, "dark"));
        assert!(!surface.has_class(RootNode::Document, "dark"));
    }

    #[test]
    fn test_recording_surface_removes_class() {
        let mut surface = RecordingSurface::new();
        surface.set_class(RootNode::Document, "dark", true);
        surface.set_class(RootNode::Document, "dark", false);
        assert!(surface.classes(RootNode::Document).is_empty());
    }

    #[test]
    fn test_removing_absent_class_is_harmless() {
        let mut surface = RecordingSurface::new();
        surface.set_class(RootNode::Body, "dark", false);
        assert_eq!(surface, RecordingSurface::new());
    }

    #[test]
    fn test_headless_is_not_renderable() {
        assert!(!Headless.is_renderable());
    }
}
