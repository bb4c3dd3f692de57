use super::{Component, DragTarget, ProjectItem, View};
use crate::config::{BoardConfig, EffortUnits};
use crate::dom::{
    handler, markup, Document, DocumentHandle, Event, EventKind, InsertPosition, NodeId, Tag,
    TEXT_PLAIN,
};
use crate::error::{BoardError, Result};
use crate::model::{Project, ProjectStatus};
use crate::store::SharedStore;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, error};

/// Class toggled on a lane's list while a compatible drag hovers over it.
pub const DROPPABLE_CLASS: &str = "droppable";

/// One lane of the board.
///
/// Subscribes to the store and, on every change, filters the snapshot down to
/// its own status and rebuilds its cards from scratch. Each card goes in at
/// the top of the list, so the newest project is shown first.
pub struct ProjectList {
    component: Component,
    lane: ProjectStatus,
    title: String,
    units: EffortUnits,
    store: SharedStore,
    doc: Weak<RefCell<Document>>,
    assigned: RefCell<Vec<Project>>,
}

impl ProjectList {
    pub fn new(
        doc: &DocumentHandle,
        store: SharedStore,
        lane: ProjectStatus,
        config: &BoardConfig,
    ) -> Result<Rc<Self>> {
        let mut d = doc.try_borrow_mut().map_err(|_| BoardError::DocumentBusy)?;
        let section_id = lane.section_id();
        let component = Component::new(
            &mut d,
            markup::LIST_TEMPLATE,
            markup::APP_HOST_ID,
            InsertPosition::BeforeEnd,
            Some(section_id.as_str()),
        )?;

        let list = Rc::new(Self {
            component,
            lane,
            title: config.lane_title(lane).to_string(),
            units: config.effort_units.clone(),
            store,
            doc: Rc::downgrade(doc),
            assigned: RefCell::new(Vec::new()),
        });
        list.clone().configure(&mut d)?;
        list.render_content(&mut d)?;

        // Subscribing never replays, so pick up whatever already exists.
        list.assign(list.store.snapshot());
        list.render_projects(&mut d)?;
        Ok(list)
    }

    pub fn lane(&self) -> ProjectStatus {
        self.lane
    }

    pub fn element(&self) -> NodeId {
        self.component.element
    }

    /// Projects in this lane, in store order (the reverse of display order).
    pub fn assigned(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    fn assign(&self, projects: Vec<Project>) {
        let relevant: Vec<Project> = projects
            .into_iter()
            .filter(|p| p.status == self.lane)
            .collect();
        *self.assigned.borrow_mut() = relevant;
    }

    fn on_projects(&self, projects: Vec<Project>) -> Result<()> {
        self.assign(projects);
        let Some(doc) = self.doc.upgrade() else {
            return Ok(());
        };
        let mut doc = doc.try_borrow_mut().map_err(|_| BoardError::DocumentBusy)?;
        self.render_projects(&mut doc)
    }

    fn render_projects(&self, doc: &mut Document) -> Result<()> {
        let list_id = self.lane.list_id();
        let list = doc.require_element_by_id(&list_id)?;
        doc.clear_children(list)?;
        for project in self.assigned.borrow().iter() {
            ProjectItem::new(doc, &list_id, project.clone(), &self.units)?;
        }
        debug!(lane = %self.lane, count = self.assigned.borrow().len(), "lane rendered");
        Ok(())
    }

    fn list_element(&self, doc: &Document) -> Result<NodeId> {
        doc.require_selector(self.component.element, Tag::Ul)
    }
}

impl View for ProjectList {
    fn configure(self: Rc<Self>, doc: &mut Document) -> Result<()> {
        let element = self.component.element;

        let this = self.clone();
        doc.add_event_listener(
            element,
            EventKind::DragOver,
            handler(move |doc, ev| this.drag_over_handler(doc, ev)),
        )?;
        let this = self.clone();
        doc.add_event_listener(
            element,
            EventKind::Drop,
            handler(move |doc, ev| this.drop_handler(doc, ev)),
        )?;
        let this = self.clone();
        doc.add_event_listener(
            element,
            EventKind::DragLeave,
            handler(move |doc, ev| this.drag_leave_handler(doc, ev)),
        )?;

        let this = Rc::downgrade(&self);
        self.store.add_listener(move |projects| {
            let Some(list) = this.upgrade() else {
                return;
            };
            if let Err(e) = list.on_projects(projects) {
                error!(lane = %list.lane, error = %e, "failed to re-render lane");
            }
        });
        Ok(())
    }

    fn render_content(&self, doc: &mut Document) -> Result<()> {
        let ul = self.list_element(doc)?;
        doc.set_id(ul, &self.lane.list_id())?;
        let h2 = doc.require_selector(self.component.element, Tag::H2)?;
        doc.set_text(h2, &self.title)?;
        Ok(())
    }
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, doc: &DocumentHandle, event: &mut Event) -> Result<()> {
        let accepts = event
            .data_transfer
            .as_ref()
            .is_some_and(|dt| dt.types().first() == Some(&TEXT_PLAIN));
        if !accepts {
            return Ok(());
        }
        event.prevent_default();
        let mut doc = doc.try_borrow_mut().map_err(|_| BoardError::DocumentBusy)?;
        let ul = self.list_element(&doc)?;
        doc.add_class(ul, DROPPABLE_CLASS)
    }

    fn drop_handler(&self, _doc: &DocumentHandle, event: &mut Event) -> Result<()> {
        let id = event
            .data_transfer
            .as_ref()
            .map(|dt| dt.get_data(TEXT_PLAIN))
            .unwrap_or_default();
        debug!(lane = %self.lane, id = %id, "drop");
        self.store.move_project(&id, self.lane);
        Ok(())
    }

    fn drag_leave_handler(&self, doc: &DocumentHandle, _event: &mut Event) -> Result<()> {
        let mut doc = doc.try_borrow_mut().map_err(|_| BoardError::DocumentBusy)?;
        let ul = self.list_element(&doc)?;
        doc.remove_class(ul, DROPPABLE_CLASS)
    }
}
