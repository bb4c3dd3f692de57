//! # Board
//!
//! [`Board`] mounts a complete board (markup, one store, the form and both
//! lanes) and offers the handful of user gestures a client needs: filling a
//! form field, submitting, dragging a card onto a lane. Every gesture goes
//! through real event dispatch, so a client drives exactly the same handlers a
//! pointer and keyboard would.
//!
//! Clients read the result back from the document ([`Board::lanes`],
//! [`Board::lane_items`]) rather than from the store, which is what makes the
//! lanes' rendering observable.

use crate::components::project_list::DROPPABLE_CLASS;
use crate::components::{ProjectInput, ProjectList};
use crate::config::BoardConfig;
use crate::dom::{
    dispatch, markup, DataTransfer, Document, DocumentHandle, Event, EventKind, NodeId, Tag,
};
use crate::error::{BoardError, Result};
use crate::model::{Project, ProjectStatus};
use crate::store::{ProjectStore, SharedStore};
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, trace};

/// Form fields in display order.
pub const FORM_FIELDS: [&str; 3] = [
    markup::TITLE_INPUT_ID,
    markup::DESCRIPTION_INPUT_ID,
    markup::EFFORT_INPUT_ID,
];

/// One card as currently rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub effort: String,
    pub description: String,
}

/// One lane as currently rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneView {
    pub status: ProjectStatus,
    pub title: String,
    pub droppable: bool,
    pub cards: Vec<CardView>,
}

pub struct Board {
    doc: DocumentHandle,
    store: SharedStore,
    config: BoardConfig,
    input: Rc<ProjectInput>,
    lanes: Vec<Rc<ProjectList>>,
}

impl Board {
    /// Builds the document and attaches the form, then the active lane, then
    /// the finished lane.
    pub fn mount(config: BoardConfig) -> Result<Self> {
        let mut doc = Document::new();
        markup::install(&mut doc)?;
        let doc = doc.into_handle();
        let store = ProjectStore::shared();

        let input = ProjectInput::new(&doc, store.clone(), &config)?;
        let lanes = ProjectStatus::ALL
            .iter()
            .map(|&status| ProjectList::new(&doc, store.clone(), status, &config))
            .collect::<Result<Vec<_>>>()?;
        debug!("board mounted");

        Ok(Self {
            doc,
            store,
            config,
            input,
            lanes,
        })
    }

    pub fn document(&self) -> &DocumentHandle {
        &self.doc
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Types `value` into a form field (`title`, `description`, `manday`).
    pub fn fill(&self, field: &str, value: &str) -> Result<()> {
        let node = self
            .input
            .field(field)
            .ok_or_else(|| BoardError::Session(format!("unknown field '{}'", field)))?;
        self.doc
            .try_borrow_mut()
            .map_err(|_| BoardError::DocumentBusy)?
            .set_value(node, value)
    }

    /// Submits the form. A rejected submission leaves an alert behind.
    pub fn submit(&self) -> Result<()> {
        let mut event = Event::new(EventKind::Submit);
        dispatch(&self.doc, self.input.element(), &mut event)
    }

    /// Drags the card for `project_id` onto the list of `lane`.
    ///
    /// Runs the whole gesture: dragstart on the card, dragover on the lane and,
    /// when the lane accepts, drop; then dragleave on the lane and dragend on
    /// the card. Returns whether the project changed lanes.
    ///
    /// A browser sends no dragleave after a drop, so the lane keeps its
    /// highlight there. Here the pointer always leaves the lane and the
    /// highlight is cleared.
    pub fn drag(&self, project_id: &str, lane: ProjectStatus) -> Result<bool> {
        let before = self.store.find(project_id).map(|p| p.status);
        let (card, target) = {
            let doc = self.doc.borrow();
            (
                doc.require_element_by_id(project_id)?,
                doc.require_element_by_id(&lane.list_id())?,
            )
        };

        let mut start = Event::drag(EventKind::DragStart, DataTransfer::new());
        dispatch(&self.doc, card, &mut start)?;
        let transfer = start.data_transfer.unwrap_or_default();

        let mut over = Event::drag(EventKind::DragOver, transfer.clone());
        dispatch(&self.doc, target, &mut over)?;
        if over.default_prevented() {
            let mut drop = Event::drag(EventKind::Drop, transfer.clone());
            dispatch(&self.doc, target, &mut drop)?;
        } else {
            debug!(id = project_id, lane = %lane, "drop refused");
        }

        let mut leave = Event::drag(EventKind::DragLeave, transfer.clone());
        dispatch(&self.doc, target, &mut leave)?;

        // A successful drop re-renders the lanes, which discards the old card.
        if self.doc.borrow().contains(card) {
            let mut end = Event::drag(EventKind::DragEnd, transfer);
            dispatch(&self.doc, card, &mut end)?;
        } else {
            trace!(id = project_id, "dragend source no longer rendered");
        }

        let after = self.store.find(project_id).map(|p| p.status);
        Ok(before != after)
    }

    /// Projects shown in `lane`, in display order.
    pub fn lane_items(&self, lane: ProjectStatus) -> Result<Vec<Project>> {
        let doc = self.doc.borrow();
        let list = doc.require_element_by_id(&lane.list_id())?;
        Ok(doc
            .children(list)
            .into_iter()
            .filter_map(|li| doc.id_of(li).and_then(|id| self.store.find(id)))
            .collect())
    }

    /// Both lanes as rendered, active first.
    pub fn lanes(&self) -> Result<Vec<LaneView>> {
        let doc = self.doc.borrow();
        self.lanes
            .iter()
            .map(|lane| read_lane(&doc, lane.lane(), lane.element()))
            .collect()
    }

    /// Resolves a full id or an unambiguous id prefix.
    pub fn resolve_id(&self, prefix: &str) -> Result<String> {
        if prefix.is_empty() {
            return Err(BoardError::Session("empty project id".to_string()));
        }
        let projects = self.store.snapshot();
        if let Some(exact) = projects.iter().find(|p| p.id == prefix) {
            return Ok(exact.id.clone());
        }
        let matches: Vec<&Project> = projects
            .iter()
            .filter(|p| p.id.starts_with(prefix))
            .collect();
        match matches.as_slice() {
            [one] => Ok(one.id.clone()),
            [] => Err(BoardError::Session(format!(
                "no project matches '{}'",
                prefix
            ))),
            _ => Err(BoardError::Session(format!(
                "'{}' matches {} projects",
                prefix,
                matches.len()
            ))),
        }
    }

    /// Current form contents, keyed by field name.
    pub fn form_values(&self) -> Result<Vec<(&'static str, String)>> {
        let doc = self.doc.borrow();
        FORM_FIELDS
            .iter()
            .map(|&field| {
                let node = self
                    .input
                    .field(field)
                    .ok_or_else(|| BoardError::MissingElement(field.to_string()))?;
                Ok((field, doc.value(node)?))
            })
            .collect()
    }

    pub fn take_alerts(&self) -> Vec<String> {
        self.doc.borrow_mut().take_alerts()
    }
}

fn read_lane(doc: &Document, status: ProjectStatus, section: NodeId) -> Result<LaneView> {
    let header = doc.require_selector(section, Tag::Header)?;
    let heading = doc.require_selector(header, Tag::H2)?;
    let list = doc.require_selector(section, Tag::Ul)?;

    let cards = doc
        .children(list)
        .into_iter()
        .map(|li| read_card(doc, li))
        .collect::<Result<Vec<_>>>()?;

    Ok(LaneView {
        status,
        title: doc.text(heading)?.to_string(),
        droppable: doc.has_class(list, DROPPABLE_CLASS),
        cards,
    })
}

fn read_card(doc: &Document, li: NodeId) -> Result<CardView> {
    let text_of = |tag: Tag| -> Result<String> {
        let node = doc.require_selector(li, tag)?;
        Ok(doc.text(node)?.to_string())
    };
    Ok(CardView {
        id: doc.id_of(li).unwrap_or_default().to_string(),
        title: text_of(Tag::H2)?,
        effort: text_of(Tag::H3)?,
        description: text_of(Tag::P)?,
    })
}
