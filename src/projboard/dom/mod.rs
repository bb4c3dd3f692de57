//! # Document Model
//!
//! A small retained element tree standing in for the browser DOM. Views build
//! their markup here, attach event listeners to elements, and the terminal
//! renderer draws whatever is connected to the root.
//!
//! ## Nodes
//!
//! Elements live in an arena keyed by [`NodeId`]. Ids are never reused, so a
//! stale id held by a discarded view simply stops resolving. Removing an
//! element's children frees the whole subtree together with its listeners.
//!
//! ## Templates
//!
//! A template is a detached subtree registered under a name. Importing it
//! deep-clones the subtree (element ids, classes, text, attributes, but no
//! listeners) into a new detached element that the caller then attaches.
//!
//! ## Lookup
//!
//! [`Document::get_element_by_id`] only sees connected elements, so ids inside
//! template content never shadow live ones. Lookups inside a fragment that is
//! not attached yet go through [`Document::query_selector`] and
//! [`Document::query_selector_id`].

use crate::error::{BoardError, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

pub mod event;
pub mod markup;

pub use event::{
    dispatch, handler, DataTransfer, DropEffect, Event, EventKind, Handler, TEXT_PLAIN,
};

pub type DocumentHandle = Rc<RefCell<Document>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body,
    Div,
    Section,
    Header,
    Form,
    Label,
    Input,
    Textarea,
    Button,
    H2,
    H3,
    P,
    Ul,
    Li,
}

/// Where [`Document::insert_adjacent`] places a node relative to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// First child of the host.
    AfterBegin,
    /// Last child of the host.
    BeforeEnd,
}

pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    pub value: String,
    pub attrs: BTreeMap<String, String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    listeners: Vec<(EventKind, Handler)>,
}

impl Element {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            text: String::new(),
            value: String::new(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
            parent: None,
            listeners: Vec::new(),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

pub struct Document {
    nodes: HashMap<NodeId, Element>,
    next_id: usize,
    root: NodeId,
    templates: HashMap<String, NodeId>,
    alerts: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: HashMap::new(),
            next_id: 0,
            root: NodeId(0),
            templates: HashMap::new(),
            alerts: Vec::new(),
        };
        doc.root = doc.create_element(Tag::Body);
        doc
    }

    pub fn into_handle(self) -> DocumentHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: Tag) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Element::new(tag));
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    fn node(&self, node: NodeId) -> Result<&Element> {
        self.nodes
            .get(&node)
            .ok_or_else(|| BoardError::MissingElement(node.to_string()))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut Element> {
        self.nodes
            .get_mut(&node)
            .ok_or_else(|| BoardError::MissingElement(node.to_string()))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // --- Tree structure ---

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert_adjacent(parent, InsertPosition::BeforeEnd, child)
    }

    /// Moves `node` under `host`, detaching it from any previous parent.
    pub fn insert_adjacent(
        &mut self,
        host: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> Result<()> {
        self.node(host)?;
        self.detach(node)?;
        let host_el = self.node_mut(host)?;
        match position {
            InsertPosition::AfterBegin => host_el.children.insert(0, node),
            InsertPosition::BeforeEnd => host_el.children.push(node),
        }
        self.node_mut(node)?.parent = Some(host);
        Ok(())
    }

    fn detach(&mut self, node: NodeId) -> Result<()> {
        if let Some(parent) = self.node_mut(node)?.parent.take() {
            if let Some(p) = self.nodes.get_mut(&parent) {
                p.children.retain(|c| *c != node);
            }
        }
        Ok(())
    }

    /// Drops every descendant of `node`.
    pub fn clear_children(&mut self, node: NodeId) -> Result<()> {
        let children = std::mem::take(&mut self.node_mut(node)?.children);
        let mut stack = children;
        while let Some(next) = stack.pop() {
            if let Some(el) = self.nodes.remove(&next) {
                stack.extend(el.children);
            }
        }
        Ok(())
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.element(node)
            .map(|el| el.children.clone())
            .unwrap_or_default()
    }

    /// Whether `node` hangs off the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.root {
                return true;
            }
            current = self.element(n).and_then(|el| el.parent);
        }
        false
    }

    /// `node` followed by its ancestors, innermost first.
    pub fn ancestry(&self, node: NodeId) -> Result<Vec<NodeId>> {
        let mut path = vec![node];
        let mut current = self.node(node)?.parent;
        while let Some(n) = current {
            path.push(n);
            current = self.element(n).and_then(|el| el.parent);
        }
        Ok(path)
    }

    // --- Lookup ---

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_in(self.root, true, |el| el.id.as_deref() == Some(id))
    }

    /// Like [`Document::get_element_by_id`], but a miss is an error.
    pub fn require_element_by_id(&self, id: &str) -> Result<NodeId> {
        self.get_element_by_id(id)
            .ok_or_else(|| BoardError::MissingElement(format!("#{}", id)))
    }

    /// First descendant of `node` with the given tag, in document order.
    pub fn query_selector(&self, node: NodeId, tag: Tag) -> Option<NodeId> {
        self.find_in(node, false, |el| el.tag == tag)
    }

    pub fn require_selector(&self, node: NodeId, tag: Tag) -> Result<NodeId> {
        self.query_selector(node, tag)
            .ok_or_else(|| BoardError::MissingElement(format!("{:?} in {}", tag, node)))
    }

    /// First descendant of `node` whose id is `id`.
    pub fn query_selector_id(&self, node: NodeId, id: &str) -> Option<NodeId> {
        self.find_in(node, false, |el| el.id.as_deref() == Some(id))
    }

    pub fn require_selector_id(&self, node: NodeId, id: &str) -> Result<NodeId> {
        self.query_selector_id(node, id)
            .ok_or_else(|| BoardError::MissingElement(format!("#{} in {}", id, node)))
    }

    fn find_in<F>(&self, start: NodeId, include_start: bool, pred: F) -> Option<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            let Some(el) = self.element(node) else {
                continue;
            };
            if (include_start || node != start) && pred(el) {
                return Some(node);
            }
            stack.extend(el.children.iter().rev());
        }
        None
    }

    // --- Element state ---

    pub fn set_id(&mut self, node: NodeId, id: &str) -> Result<()> {
        self.node_mut(node)?.id = Some(id.to_string());
        Ok(())
    }

    pub fn id_of(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(|el| el.id.as_deref())
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.node_mut(node)?.text = text.to_string();
        Ok(())
    }

    pub fn text(&self, node: NodeId) -> Result<&str> {
        Ok(self.node(node)?.text.as_str())
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) -> Result<()> {
        self.node_mut(node)?.value = value.to_string();
        Ok(())
    }

    pub fn value(&self, node: NodeId) -> Result<String> {
        Ok(self.node(node)?.value.clone())
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.node_mut(node)?
            .attrs
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attrs.get(name))
            .map(String::as_str)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        let el = self.node_mut(node)?;
        if !el.has_class(class) {
            el.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        self.node_mut(node)?.classes.retain(|c| c != class);
        Ok(())
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    // --- Events ---

    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        handler: Handler,
    ) -> Result<()> {
        self.node_mut(node)?.listeners.push((kind, handler));
        Ok(())
    }

    pub(crate) fn listeners_for(&self, node: NodeId, kind: EventKind) -> Vec<Handler> {
        self.element(node)
            .map(|el| {
                el.listeners
                    .iter()
                    .filter(|(k, _)| *k == kind)
                    .map(|(_, h)| h.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // --- Templates ---

    /// Registers the detached subtree at `content` as template `name`.
    pub fn register_template(&mut self, name: &str, content: NodeId) -> Result<()> {
        self.node(content)?;
        self.templates.insert(name.to_string(), content);
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Deep-clones template `name` into a new detached element.
    pub fn import_template(&mut self, name: &str) -> Result<NodeId> {
        let source = *self
            .templates
            .get(name)
            .ok_or_else(|| BoardError::MissingTemplate(name.to_string()))?;
        self.clone_subtree(source)
    }

    fn clone_subtree(&mut self, source: NodeId) -> Result<NodeId> {
        let (copy, children) = {
            let el = self.node(source)?;
            let copy = Element {
                id: el.id.clone(),
                classes: el.classes.clone(),
                text: el.text.clone(),
                value: el.value.clone(),
                attrs: el.attrs.clone(),
                ..Element::new(el.tag)
            };
            (copy, el.children.clone())
        };
        let node = self.create_element(copy.tag);
        self.nodes.insert(node, copy);
        for child in children {
            let cloned = self.clone_subtree(child)?;
            self.append_child(node, cloned)?;
        }
        Ok(node)
    }

    // --- Alerts ---

    /// Queues a blocking user-facing notice.
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}
