//! Capability interfaces the page runtime needs from its host document.
//!
//! `DomQuery` is the read side (structure, attributes, geometry) and
//! `PageSurface` the write side (class/text/data mutations, navigation,
//! dialogs, diagnostics). A browser binding and the in-memory
//! `HeadlessDocument` both implement them.

use newsdesk_core::{NodeId, Rect, Viewport};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("node {0} is detached from the document")]
    Detached(NodeId),
}

/// Minimal selector vocabulary used by the page hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Class(&'a str),
    AnyClass(&'a [&'a str]),
    Tag(&'a str),
    /// `input[type=...]`
    InputType(&'a str),
}

pub trait DomQuery {
    /// Top-level elements in document order.
    fn roots(&self) -> Vec<NodeId>;
    fn children(&self, node: NodeId) -> Vec<NodeId>;
    fn parent(&self, node: NodeId) -> Option<NodeId>;
    fn tag_name(&self, node: NodeId) -> Option<&str>;
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn has_class(&self, node: NodeId, class: &str) -> bool;
    /// Current value of a form control.
    fn value(&self, node: NodeId) -> Option<String>;
    fn bounding_rect(&self, node: NodeId) -> Rect;
    fn viewport(&self) -> Viewport;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.roots().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if self.attribute(node, "id").as_deref() == Some(id) {
                return Some(node);
            }
            stack.extend(self.children(node).into_iter().rev());
        }
        None
    }

    fn matches(&self, node: NodeId, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::Class(class) => self.has_class(node, class),
            Selector::AnyClass(classes) => classes.iter().any(|c| self.has_class(node, c)),
            Selector::Tag(tag) => self
                .tag_name(node)
                .is_some_and(|t| t.eq_ignore_ascii_case(tag)),
            Selector::InputType(kind) => {
                self.tag_name(node)
                    .is_some_and(|t| t.eq_ignore_ascii_case("input"))
                    && self
                        .attribute(node, "type")
                        .is_some_and(|t| t.eq_ignore_ascii_case(kind))
            }
        }
    }

    /// Every matching element in document order.
    fn query_all(&self, selector: &Selector<'_>) -> Vec<NodeId> {
        let mut found = Vec::new();
        for root in self.roots() {
            self.collect_matching(root, selector, true, &mut found);
        }
        found
    }

    /// First matching descendant of `root`, excluding `root` itself.
    fn query_within(&self, root: NodeId, selector: &Selector<'_>) -> Option<NodeId> {
        let mut found = Vec::new();
        self.collect_matching(root, selector, false, &mut found);
        found.into_iter().next()
    }

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: NodeId, selector: &Selector<'_>) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if self.matches(candidate, selector) {
                return Some(candidate);
            }
            current = self.parent(candidate);
        }
        None
    }

    #[doc(hidden)]
    fn collect_matching(
        &self,
        node: NodeId,
        selector: &Selector<'_>,
        include_self: bool,
        found: &mut Vec<NodeId>,
    ) {
        if include_self && self.matches(node, selector) {
            found.push(node);
        }
        for child in self.children(node) {
            self.collect_matching(child, selector, true, found);
        }
    }
}

pub trait PageSurface {
    fn set_class(&mut self, node: NodeId, class: &str, present: bool) -> Result<(), DomError>;
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DomError>;
    /// Writes `data-{key}`.
    fn set_data(&mut self, node: NodeId, key: &str, value: &str) -> Result<(), DomError>;
    fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        class: &str,
        text: &str,
    ) -> Result<NodeId, DomError>;
    fn remove_element(&mut self, node: NodeId) -> Result<(), DomError>;
    fn reset_form(&mut self, form: NodeId) -> Result<(), DomError>;
    fn navigate(&mut self, target: &str);
    fn open_window(&mut self, url: &str, name: &str, features: &str);
    fn alert(&mut self, message: &str);
    fn log_event(&mut self, line: &str);
}

/// Everything the runtime needs from a host.
pub trait Document: DomQuery + PageSurface {}

impl<T: DomQuery + PageSurface> Document for T {}
