use super::{Component, Draggable, View};
use crate::config::EffortUnits;
use crate::dom::{
    handler, markup, DataTransfer, Document, DocumentHandle, DropEffect, Event, EventKind,
    InsertPosition, NodeId, Tag, TEXT_PLAIN,
};
use crate::error::Result;
use crate::model::Project;
use std::rc::Rc;
use tracing::debug;

/// Effort as shown on a card.
///
/// Zero (or a non-number) shows nothing, anything under a month is shown in
/// days, the rest in months. Months are a plain division with no rounding, so
/// 45 days at 20 days a month reads `2.25man-month`.
pub fn effort_label(effort: f64, units: &EffortUnits) -> String {
    if effort == 0.0 || effort.is_nan() {
        return String::new();
    }
    if effort < units.days_per_month {
        format!("{}{}", effort, units.day_suffix)
    } else {
        format!("{}{}", effort / units.days_per_month, units.month_suffix)
    }
}

/// A single project card inside a lane.
pub struct ProjectItem {
    component: Component,
    project: Project,
    units: EffortUnits,
}

impl ProjectItem {
    /// Renders `project` at the top of the list with id `host_id`.
    pub fn new(
        doc: &mut Document,
        host_id: &str,
        project: Project,
        units: &EffortUnits,
    ) -> Result<Rc<Self>> {
        let component = Component::new(
            doc,
            markup::ITEM_TEMPLATE,
            host_id,
            InsertPosition::AfterBegin,
            Some(project.id.as_str()),
        )?;
        let item = Rc::new(Self {
            component,
            project,
            units: units.clone(),
        });
        item.clone().configure(doc)?;
        item.render_content(doc)?;
        Ok(item)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn element(&self) -> NodeId {
        self.component.element
    }

    pub fn effort(&self) -> String {
        effort_label(self.project.effort, &self.units)
    }
}

impl View for ProjectItem {
    fn configure(self: Rc<Self>, doc: &mut Document) -> Result<()> {
        let element = self.component.element;

        let this = self.clone();
        doc.add_event_listener(
            element,
            EventKind::DragStart,
            handler(move |doc, ev| this.drag_start_handler(doc, ev)),
        )?;

        let this = self;
        doc.add_event_listener(
            element,
            EventKind::DragEnd,
            handler(move |doc, ev| this.drag_end_handler(doc, ev)),
        )?;
        Ok(())
    }

    fn render_content(&self, doc: &mut Document) -> Result<()> {
        let element = self.component.element;
        let title = doc.require_selector(element, Tag::H2)?;
        doc.set_text(title, &self.project.title)?;
        let effort = doc.require_selector(element, Tag::H3)?;
        doc.set_text(effort, &self.effort())?;
        let description = doc.require_selector(element, Tag::P)?;
        doc.set_text(description, &self.project.description)?;
        Ok(())
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, _doc: &DocumentHandle, event: &mut Event) -> Result<()> {
        let transfer = event.data_transfer.get_or_insert_with(DataTransfer::new);
        transfer.set_data(TEXT_PLAIN, &self.project.id);
        transfer.effect_allowed = DropEffect::Move;
        debug!(id = %self.project.id, "dragstart");
        Ok(())
    }

    fn drag_end_handler(&self, _doc: &DocumentHandle, _event: &mut Event) -> Result<()> {
        debug!(id = %self.project.id, "dragend");
        Ok(())
    }
}
