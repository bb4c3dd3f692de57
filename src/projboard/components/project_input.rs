use super::{Component, View};
use crate::config::BoardConfig;
use crate::dom::{handler, markup, Document, DocumentHandle, Event, EventKind, InsertPosition, NodeId};
use crate::error::{BoardError, Result};
use crate::store::SharedStore;
use crate::validation::{validate, Validatable};
use std::rc::Rc;
use tracing::{debug, info};

/// The element id the form is given once attached.
pub const FORM_ID: &str = "user-input";

/// Parses the effort field the way a numeric form input reads.
///
/// Blank reads as zero; anything that is not a number reads as NaN, which
/// fails any bound it is checked against.
pub fn parse_effort(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// The "new project" form.
pub struct ProjectInput {
    component: Component,
    title_input: NodeId,
    description_input: NodeId,
    effort_input: NodeId,
    store: SharedStore,
    config: BoardConfig,
}

impl ProjectInput {
    pub fn new(doc: &DocumentHandle, store: SharedStore, config: &BoardConfig) -> Result<Rc<Self>> {
        let mut d = doc.try_borrow_mut().map_err(|_| BoardError::DocumentBusy)?;
        let component = Component::new(
            &mut d,
            markup::INPUT_TEMPLATE,
            markup::APP_HOST_ID,
            InsertPosition::AfterBegin,
            Some(FORM_ID),
        )?;
        let form = component.element;
        let input = Rc::new(Self {
            component,
            title_input: d.require_selector_id(form, markup::TITLE_INPUT_ID)?,
            description_input: d.require_selector_id(form, markup::DESCRIPTION_INPUT_ID)?,
            effort_input: d.require_selector_id(form, markup::EFFORT_INPUT_ID)?,
            store,
            config: config.clone(),
        });
        input.clone().configure(&mut d)?;
        Ok(input)
    }

    pub fn element(&self) -> NodeId {
        self.component.element
    }

    /// The input element backing `field` (`title`, `description` or `manday`).
    pub fn field(&self, field: &str) -> Option<NodeId> {
        match field {
            markup::TITLE_INPUT_ID => Some(self.title_input),
            markup::DESCRIPTION_INPUT_ID => Some(self.description_input),
            markup::EFFORT_INPUT_ID | "effort" => Some(self.effort_input),
            _ => None,
        }
    }

    fn clear_inputs(&self, doc: &mut Document) -> Result<()> {
        for node in [self.title_input, self.description_input, self.effort_input] {
            doc.set_value(node, "")?;
        }
        Ok(())
    }

    /// Validated `(title, description, effort)`, or `None` after raising an alert.
    fn gather_user_input(&self, doc: &mut Document) -> Result<Option<(String, String, f64)>> {
        let title = doc.value(self.title_input)?;
        let description = doc.value(self.description_input)?;
        let effort = parse_effort(&doc.value(self.effort_input)?);

        let title_check = Validatable::new(title.as_str()).required();
        let description_check = Validatable::new(description.as_str())
            .max_length(self.config.description_max_length)
            .min_length(0);
        let effort_check = Validatable::new(effort)
            .min(self.config.effort_min)
            .max(self.config.effort_max);

        if !validate(&title_check) || !validate(&description_check) || !validate(&effort_check) {
            info!("submission rejected by validation");
            doc.alert(&self.config.alert_message);
            return Ok(None);
        }
        Ok(Some((title, description, effort)))
    }

    fn submit_handler(&self, doc: &DocumentHandle, event: &mut Event) -> Result<()> {
        event.prevent_default();
        let gathered = {
            let mut d = doc.try_borrow_mut().map_err(|_| BoardError::DocumentBusy)?;
            self.gather_user_input(&mut d)?
        };
        let Some((title, description, effort)) = gathered else {
            return Ok(());
        };

        // The document must be released here: the store re-renders the lanes.
        let project = self.store.add_project(title, description, effort);
        debug!(id = %project.id, "submitted");

        let mut d = doc.try_borrow_mut().map_err(|_| BoardError::DocumentBusy)?;
        self.clear_inputs(&mut d)
    }
}

impl View for ProjectInput {
    fn configure(self: Rc<Self>, doc: &mut Document) -> Result<()> {
        let form = self.component.element;
        let this = self;
        doc.add_event_listener(
            form,
            EventKind::Submit,
            handler(move |doc, ev| this.submit_handler(doc, ev)),
        )
    }

    fn render_content(&self, _doc: &mut Document) -> Result<()> {
        Ok(())
    }
}
