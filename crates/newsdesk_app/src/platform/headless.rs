//! In-memory document used by tests and the session replayer.

use std::collections::BTreeMap;

use newsdesk_core::{NodeId, Rect, Viewport};
use page_logging::{page_debug, page_warn};
use serde::Deserialize;
use url::Url;

use super::document::{DomError, DomQuery, PageSurface};

/// Declarative description of an element and its subtree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    /// Space-separated class list.
    pub class: String,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    /// `(top, left, bottom, right)` relative to the viewport.
    pub rect: Option<(f64, f64, f64, f64)>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn rect(mut self, top: f64, left: f64, bottom: f64, right: f64) -> Self {
        self.rect = Some((top, left, bottom, right));
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    pub url: String,
    pub name: String,
    pub features: String,
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    value: String,
    rect: Rect,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attached: bool,
}

#[derive(Debug, Clone)]
pub struct HeadlessDocument {
    elements: Vec<Element>,
    roots: Vec<NodeId>,
    location: Url,
    window: Viewport,
    client: Viewport,
    alerts: Vec<String>,
    navigations: Vec<String>,
    windows: Vec<OpenedWindow>,
    console: Vec<String>,
}

impl HeadlessDocument {
    pub fn new(location: Url) -> Self {
        Self {
            elements: Vec::new(),
            roots: Vec::new(),
            location,
            window: Viewport::default(),
            client: Viewport::default(),
            alerts: Vec::new(),
            navigations: Vec::new(),
            windows: Vec::new(),
            console: Vec::new(),
        }
    }

    /// `window.innerWidth/innerHeight`; zero falls back to the client size.
    pub fn set_window_size(&mut self, width: f64, height: f64) {
        self.window = Viewport { width, height };
    }

    /// `document.documentElement.clientWidth/clientHeight`.
    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.client = Viewport { width, height };
    }

    /// Inserts `spec` (and its subtree) under `parent`, or at the top level.
    pub fn insert(&mut self, parent: Option<NodeId>, spec: ElementSpec) -> NodeId {
        let mut attrs = spec.attrs;
        if let Some(id) = spec.id {
            attrs.insert("id".to_string(), id);
        }
        let value = attrs.get("value").cloned().unwrap_or_default();
        let rect = spec
            .rect
            .map(|(top, left, bottom, right)| Rect::new(top, left, bottom, right))
            .unwrap_or_default();
        let node = NodeId(self.elements.len() as u32);
        self.elements.push(Element {
            tag: spec.tag.to_ascii_lowercase(),
            classes: spec.class.split_whitespace().map(str::to_string).collect(),
            attrs,
            text: spec.text,
            value,
            rect,
            parent,
            children: Vec::new(),
            attached: true,
        });
        match parent.and_then(|p| self.elements.get_mut(p.0 as usize)) {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
        for child in spec.children {
            self.insert(Some(node), child);
        }
        node
    }

    /// Types into a form control.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(node)?.value = value.into();
        Ok(())
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) -> Result<(), DomError> {
        self.element_mut(node)?.rect = rect;
        Ok(())
    }

    pub fn text_content(&self, node: NodeId) -> Option<&str> {
        self.element(node).ok().map(|e| e.text.as_str())
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.element(node).is_ok()
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn windows(&self) -> &[OpenedWindow] {
        &self.windows
    }

    pub fn console(&self) -> &[String] {
        &self.console
    }

    fn element(&self, node: NodeId) -> Result<&Element, DomError> {
        let element = self
            .elements
            .get(node.0 as usize)
            .ok_or(DomError::UnknownNode(node))?;
        if !element.attached {
            return Err(DomError::Detached(node));
        }
        Ok(element)
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, DomError> {
        let element = self
            .elements
            .get_mut(node.0 as usize)
            .ok_or(DomError::UnknownNode(node))?;
        if !element.attached {
            return Err(DomError::Detached(node));
        }
        Ok(element)
    }

    fn detach_subtree(&mut self, node: NodeId) {
        let children = match self.elements.get_mut(node.0 as usize) {
            Some(element) => {
                element.attached = false;
                element.children.clone()
            }
            None => return,
        };
        for child in children {
            self.detach_subtree(child);
        }
    }

    fn reset_controls(&mut self, node: NodeId) {
        let children = match self.elements.get_mut(node.0 as usize) {
            Some(element) => {
                if matches!(element.tag.as_str(), "input" | "textarea" | "select") {
                    element.value = element.attrs.get("value").cloned().unwrap_or_default();
                }
                element.children.clone()
            }
            None => return,
        };
        for child in children {
            self.reset_controls(child);
        }
    }
}

impl DomQuery for HeadlessDocument {
    fn roots(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .copied()
            .filter(|n| self.is_attached(*n))
            .collect()
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.element(node)
            .map(|e| e.children.iter().copied().filter(|c| self.is_attached(*c)).collect())
            .unwrap_or_default()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).ok().and_then(|e| e.parent)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).ok().map(|e| e.tag.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node).ok().and_then(|e| e.attrs.get(name).cloned())
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .map(|e| e.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.element(node).ok().map(|e| e.value.clone())
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.element(node).map(|e| e.rect).unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        let width = if self.window.width > 0.0 {
            self.window.width
        } else {
            self.client.width
        };
        let height = if self.window.height > 0.0 {
            self.window.height
        } else {
            self.client.height
        };
        Viewport { width, height }
    }
}

impl PageSurface for HeadlessDocument {
    fn set_class(&mut self, node: NodeId, class: &str, present: bool) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        let has = element.classes.iter().any(|c| c == class);
        if present && !has {
            element.classes.push(class.to_string());
        } else if !present && has {
            element.classes.retain(|c| c != class);
        }
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        element.text = text.to_string();
        let children = std::mem::take(&mut element.children);
        for child in children {
            self.detach_subtree(child);
        }
        Ok(())
    }

    fn set_data(&mut self, node: NodeId, key: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(node)?
            .attrs
            .insert(format!("data-{key}"), value.to_string());
        Ok(())
    }

    fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        class: &str,
        text: &str,
    ) -> Result<NodeId, DomError> {
        self.element(parent)?;
        Ok(self.insert(
            Some(parent),
            ElementSpec::new(tag).class(class).text(text),
        ))
    }

    fn remove_element(&mut self, node: NodeId) -> Result<(), DomError> {
        let parent = self.element(node)?.parent;
        match parent.and_then(|p| self.elements.get_mut(p.0 as usize)) {
            Some(parent) => parent.children.retain(|c| *c != node),
            None => self.roots.retain(|r| *r != node),
        }
        self.detach_subtree(node);
        Ok(())
    }

    fn reset_form(&mut self, form: NodeId) -> Result<(), DomError> {
        self.element(form)?;
        self.reset_controls(form);
        Ok(())
    }

    fn navigate(&mut self, target: &str) {
        match self.location.join(target) {
            Ok(resolved) => {
                page_debug!("navigate {} -> {}", target, resolved);
                self.navigations.push(resolved.to_string());
                self.location = resolved;
            }
            Err(err) => {
                page_warn!("Cannot resolve navigation target {:?}: {}", target, err);
            }
        }
    }

    fn open_window(&mut self, url: &str, name: &str, features: &str) {
        self.windows.push(OpenedWindow {
            url: url.to_string(),
            name: name.to_string(),
            features: features.to_string(),
        });
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn log_event(&mut self, line: &str) {
        self.console.push(line.to_string());
    }
}
