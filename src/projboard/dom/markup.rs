//! The page skeleton: the `app` host and the three templates the views clone.
//!
//! ```text
//! <div id="app"></div>
//!
//! <template id="project-input">
//!   <form>
//!     <div class="form-control"><label for="title">Title</label><input id="title"></div>
//!     <div class="form-control"><label for="description">Description</label><textarea id="description"></div>
//!     <div class="form-control"><label for="manday">Effort (man-days)</label><input id="manday" type="number"></div>
//!     <button type="submit">ADD PROJECT</button>
//!   </form>
//! </template>
//!
//! <template id="project-list">
//!   <section class="projects"><header><h2></h2></header><ul></ul></section>
//! </template>
//!
//! <template id="single-project">
//!   <li draggable="true"><h2></h2><h3></h3><p></p></li>
//! </template>
//! ```

use super::{Document, NodeId, Tag};
use crate::error::Result;

pub const APP_HOST_ID: &str = "app";
pub const INPUT_TEMPLATE: &str = "project-input";
pub const LIST_TEMPLATE: &str = "project-list";
pub const ITEM_TEMPLATE: &str = "single-project";

pub const TITLE_INPUT_ID: &str = "title";
pub const DESCRIPTION_INPUT_ID: &str = "description";
pub const EFFORT_INPUT_ID: &str = "manday";

/// Builds the host element and registers every template.
pub fn install(doc: &mut Document) -> Result<()> {
    let app = doc.create_element(Tag::Div);
    doc.set_id(app, APP_HOST_ID)?;
    let root = doc.root();
    doc.append_child(root, app)?;

    let input = input_template(doc)?;
    doc.register_template(INPUT_TEMPLATE, input)?;
    let list = list_template(doc)?;
    doc.register_template(LIST_TEMPLATE, list)?;
    let item = item_template(doc)?;
    doc.register_template(ITEM_TEMPLATE, item)?;
    Ok(())
}

fn input_template(doc: &mut Document) -> Result<NodeId> {
    let form = doc.create_element(Tag::Form);
    for (id, label, tag) in [
        (TITLE_INPUT_ID, "Title", Tag::Input),
        (DESCRIPTION_INPUT_ID, "Description", Tag::Textarea),
        (EFFORT_INPUT_ID, "Effort (man-days)", Tag::Input),
    ] {
        let control = doc.create_element(Tag::Div);
        doc.add_class(control, "form-control")?;

        let label_el = doc.create_element(Tag::Label);
        doc.set_attr(label_el, "for", id)?;
        doc.set_text(label_el, label)?;

        let field = doc.create_element(tag);
        doc.set_id(field, id)?;
        if id == EFFORT_INPUT_ID {
            doc.set_attr(field, "type", "number")?;
        }

        doc.append_child(control, label_el)?;
        doc.append_child(control, field)?;
        doc.append_child(form, control)?;
    }

    let button = doc.create_element(Tag::Button);
    doc.set_attr(button, "type", "submit")?;
    doc.set_text(button, "ADD PROJECT")?;
    doc.append_child(form, button)?;
    Ok(form)
}

fn list_template(doc: &mut Document) -> Result<NodeId> {
    let section = doc.create_element(Tag::Section);
    doc.add_class(section, "projects")?;
    let header = doc.create_element(Tag::Header);
    let h2 = doc.create_element(Tag::H2);
    let ul = doc.create_element(Tag::Ul);
    doc.append_child(header, h2)?;
    doc.append_child(section, header)?;
    doc.append_child(section, ul)?;
    Ok(section)
}

fn item_template(doc: &mut Document) -> Result<NodeId> {
    let li = doc.create_element(Tag::Li);
    doc.set_attr(li, "draggable", "true")?;
    for tag in [Tag::H2, Tag::H3, Tag::P] {
        let child = doc.create_element(tag);
        doc.append_child(li, child)?;
    }
    Ok(li)
}
