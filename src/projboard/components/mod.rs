//! # Views
//!
//! Every view is assembled the same way: clone a named template, optionally give
//! the clone an element id, attach it to a host element. [`Component`] does that
//! part. What differs per view (which listeners to wire, what to write into the
//! fragment) lives behind the [`View`] trait. Concrete views own a `Component`
//! and call `configure` and `render_content` themselves, at the end of their
//! constructor.
//!
//! Event handlers are closures that capture an `Rc` of the view they belong to,
//! so a handler always runs against the instance that registered it. The
//! element holds the closure, which means a view lives exactly as long as its
//! element does.
//!
//! - [`ProjectInput`]: the form; validates and adds projects.
//! - [`ProjectList`]: one lane; re-renders on store changes, accepts drops.
//! - [`ProjectItem`]: one card; starts drags.

use crate::dom::{Document, DocumentHandle, Event, InsertPosition, NodeId};
use crate::error::Result;
use std::rc::Rc;

pub mod project_input;
pub mod project_item;
pub mod project_list;

pub use project_input::ProjectInput;
pub use project_item::{effort_label, ProjectItem};
pub use project_list::ProjectList;

/// A template instance attached to its host.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub host: NodeId,
    pub element: NodeId,
}

impl Component {
    /// Clones `template_id`, assigns `new_element_id` if given, and inserts the
    /// clone into the element with id `host_id`.
    ///
    /// Fails when the host or template is missing; the markup is assumed to be
    /// complete, so callers propagate this straight out.
    pub fn new(
        doc: &mut Document,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
        new_element_id: Option<&str>,
    ) -> Result<Self> {
        let host = doc.require_element_by_id(host_id)?;
        let element = doc.import_template(template_id)?;
        if let Some(id) = new_element_id {
            doc.set_id(element, id)?;
        }
        doc.insert_adjacent(host, position, element)?;
        Ok(Self { host, element })
    }
}

/// The per-view extension points.
pub trait View {
    /// Wires event listeners and subscriptions.
    fn configure(self: Rc<Self>, doc: &mut Document) -> Result<()>;

    /// Writes the view's data into its fragment.
    fn render_content(&self, doc: &mut Document) -> Result<()>;
}

/// A source of drag operations.
pub trait Draggable {
    fn drag_start_handler(&self, doc: &DocumentHandle, event: &mut Event) -> Result<()>;
    fn drag_end_handler(&self, doc: &DocumentHandle, event: &mut Event) -> Result<()>;
}

/// A place drags can be dropped on.
pub trait DragTarget {
    fn drag_over_handler(&self, doc: &DocumentHandle, event: &mut Event) -> Result<()>;
    fn drop_handler(&self, doc: &DocumentHandle, event: &mut Event) -> Result<()>;
    fn drag_leave_handler(&self, doc: &DocumentHandle, event: &mut Event) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::markup::{install, APP_HOST_ID, LIST_TEMPLATE};
    use crate::error::BoardError;

    #[test]
    fn test_component_attaches_clone_with_id() {
        let mut doc = Document::new();
        install(&mut doc).unwrap();

        let first = Component::new(
            &mut doc,
            LIST_TEMPLATE,
            APP_HOST_ID,
            InsertPosition::BeforeEnd,
            Some("first"),
        )
        .unwrap();
        let second = Component::new(
            &mut doc,
            LIST_TEMPLATE,
            APP_HOST_ID,
            InsertPosition::AfterBegin,
            None,
        )
        .unwrap();

        assert_eq!(doc.get_element_by_id("first"), Some(first.element));
        assert_eq!(doc.children(first.host), vec![second.element, first.element]);
        assert!(doc.id_of(second.element).is_none());
    }

    #[test]
    fn test_component_fails_fast_on_missing_markup() {
        let mut doc = Document::new();
        install(&mut doc).unwrap();

        let no_host = Component::new(
            &mut doc,
            LIST_TEMPLATE,
            "nowhere",
            InsertPosition::BeforeEnd,
            None,
        );
        assert!(matches!(no_host, Err(BoardError::MissingElement(_))));

        let no_template = Component::new(
            &mut doc,
            "nothing",
            APP_HOST_ID,
            InsertPosition::BeforeEnd,
            None,
        );
        assert!(matches!(no_template, Err(BoardError::MissingTemplate(_))));
    }
}
