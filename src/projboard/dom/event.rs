use super::{DocumentHandle, NodeId};
use crate::error::Result;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// MIME type under which a dragged project's id travels.
pub const TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    DragStart,
    DragEnd,
    DragOver,
    Drop,
    DragLeave,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Submit => "submit",
            EventKind::DragStart => "dragstart",
            EventKind::DragEnd => "dragend",
            EventKind::DragOver => "dragover",
            EventKind::Drop => "drop",
            EventKind::DragLeave => "dragleave",
        };
        f.write_str(name)
    }
}

/// Operations a drag source permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// Payload carried from drag start to drop, keyed by MIME type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data for `format`, replacing an earlier value but keeping its
    /// position in [`DataTransfer::types`].
    pub fn set_data(&mut self, format: &str, data: &str) {
        match self.entries.iter_mut().find(|(f, _)| f == format) {
            Some(entry) => entry.1 = data.to_string(),
            None => self.entries.push((format.to_string(), data.to_string())),
        }
    }

    /// The data stored for `format`, or an empty string.
    pub fn get_data(&self, format: &str) -> String {
        self.entries
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, d)| d.clone())
            .unwrap_or_default()
    }

    /// Formats in the order they were first set.
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(f, _)| f.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    pub kind: EventKind,
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            data_transfer: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// A drag event carrying `transfer`.
    pub fn drag(kind: EventKind, transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(transfer),
            ..Self::new(kind)
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

pub type Handler = Rc<dyn Fn(&DocumentHandle, &mut Event) -> Result<()>>;

/// Wraps a closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&DocumentHandle, &mut Event) -> Result<()> + 'static,
{
    Rc::new(f)
}

/// Delivers `event` to `target` and then to each of its ancestors.
///
/// The document is not borrowed while a handler runs, so handlers are free to
/// borrow it (mutably, too) and to trigger store notifications that re-render
/// parts of the tree. A node removed by an earlier handler is skipped.
pub fn dispatch(doc: &DocumentHandle, target: NodeId, event: &mut Event) -> Result<()> {
    let path = doc.borrow().ancestry(target)?;
    trace!(kind = %event.kind, %target, "dispatch");

    for node in path {
        let handlers = doc.borrow().listeners_for(node, event.kind);
        for handler in handlers {
            handler(doc, event)?;
        }
        if event.propagation_stopped {
            break;
        }
    }
    Ok(())
}
