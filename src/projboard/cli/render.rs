//! # Rendering Module
//!
//! Turns what the board currently shows into styled terminal text via
//! `stencil`.
//!
//! Layout (short ids, column widths, right-aligned efforts) is computed here,
//! because it needs Unicode-aware width math. Templates only decide structure
//! and pick styles by name.

use super::styles::{names, BOARD_PALETTE};
use super::templates::{BOARD_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE};
use projboard::app::LaneView;
use projboard::components::effort_label;
use projboard::config::EffortUnits;
use projboard::error::{BoardError, Result};
use projboard::model::{Project, ProjectStatus};
use serde::Serialize;
use stencil::Stencil;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 64;
pub const ID_WIDTH: usize = 8;
pub const EFFORT_WIDTH: usize = 14;
pub const LABEL_WIDTH: usize = 14;
pub const INDENT: &str = "          ";
const TITLE_WIDTH: usize = LINE_WIDTH - ID_WIDTH - 2 - EFFORT_WIDTH;
const LANE_WIDTH: usize = 8;

#[derive(Serialize)]
struct CardLine {
    short_id: String,
    title: String,
    effort: String,
    effort_pad: String,
    description: String,
}

#[derive(Serialize)]
struct LaneBlock {
    heading: String,
    heading_style: &'static str,
    cards: Vec<CardLine>,
}

#[derive(Serialize)]
struct FormLine {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct BoardData {
    form: Vec<FormLine>,
    form_heading: &'static str,
    lanes: Vec<LaneBlock>,
    rule: String,
    indent: &'static str,
    label_width: usize,
    title_width: usize,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct ListItem {
    short_id: String,
    lane: String,
    lane_style: &'static str,
    title: String,
    effort: String,
}

#[derive(Serialize)]
struct ListData {
    items: Vec<ListItem>,
    lane_width: usize,
    empty_message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Alert,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn alert(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Alert,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct MessageLine {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageLine>,
}

/// First `ID_WIDTH` characters of a project id.
pub fn short_id(id: &str) -> String {
    id.chars().take(ID_WIDTH).collect()
}

/// Spaces that right-align `text` in a column `width` display columns wide.
fn align_right(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn stencil(use_color: bool) -> Result<Stencil> {
    let mut stencil = Stencil::with_color(BOARD_PALETTE.clone(), use_color);
    for (name, source) in [
        ("board", BOARD_TEMPLATE),
        ("list", LIST_TEMPLATE),
        ("messages", MESSAGES_TEMPLATE),
    ] {
        stencil
            .add_template(name, source)
            .map_err(|e| BoardError::Render(e.to_string()))?;
    }
    Ok(stencil)
}

fn render_template<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String> {
    stencil(use_color)?
        .render(name, data)
        .map_err(|e| BoardError::Render(e.to_string()))
}

/// Renders the lanes, optionally preceded by the form's current contents.
pub fn render_board(
    lanes: &[LaneView],
    form: &[(&str, String)],
    use_color: bool,
) -> Result<String> {
    let lanes = lanes
        .iter()
        .map(|lane| LaneBlock {
            heading: format!("{} ({})", lane.title, lane.cards.len()),
            heading_style: if lane.droppable {
                names::LANE_DROPPABLE
            } else {
                names::LANE_TITLE
            },
            cards: lane
                .cards
                .iter()
                .map(|card| CardLine {
                    short_id: short_id(&card.id),
                    title: card.title.clone(),
                    effort_pad: align_right(&card.effort, EFFORT_WIDTH),
                    effort: card.effort.clone(),
                    description: card.description.clone(),
                })
                .collect(),
        })
        .collect();

    let data = BoardData {
        form: form
            .iter()
            .map(|(name, value)| FormLine {
                name: name.to_string(),
                value: value.clone(),
            })
            .collect(),
        form_heading: "NEW PROJECT",
        lanes,
        rule: "─".repeat(LINE_WIDTH),
        indent: INDENT,
        label_width: LABEL_WIDTH,
        title_width: TITLE_WIDTH,
        empty_message: "(no projects)",
    };
    render_template("board", &data, use_color)
}

/// One line per project: short id, lane, title and effort label.
pub fn render_project_list(
    projects: &[Project],
    units: &EffortUnits,
    use_color: bool,
) -> Result<String> {
    let items = projects
        .iter()
        .map(|p| ListItem {
            short_id: short_id(&p.id),
            lane: p.status.to_string(),
            lane_style: match p.status {
                ProjectStatus::Active => names::LANE_ACTIVE,
                ProjectStatus::Finished => names::LANE_FINISHED,
            },
            title: p.title.clone(),
            effort: effort_label(p.effort, units),
        })
        .collect();
    let data = ListData {
        items,
        lane_width: LANE_WIDTH,
        empty_message: "No projects.",
    };
    render_template("list", &data, use_color)
}

pub fn render_messages(messages: &[Message], use_color: bool) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| {
                let (prefix, style) = match m.level {
                    MessageLevel::Info => ("", names::INFO),
                    MessageLevel::Alert => ("alert: ", names::ALERT),
                    MessageLevel::Error => ("error: ", names::ERROR),
                };
                MessageLine {
                    content: format!("{}{}", prefix, m.content),
                    style,
                }
            })
            .collect(),
    };
    render_template("messages", &data, use_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use projboard::app::CardView;

    fn card(id: &str, title: &str, effort: &str, description: &str) -> CardView {
        CardView {
            id: id.into(),
            title: title.into(),
            effort: effort.into(),
            description: description.into(),
        }
    }

    fn lane(status: ProjectStatus, title: &str, cards: Vec<CardView>) -> LaneView {
        LaneView {
            status,
            title: title.into(),
            droppable: false,
            cards,
        }
    }

    #[test]
    fn test_render_empty_board() {
        let lanes = vec![
            lane(ProjectStatus::Active, "ACTIVE PROJECTS", vec![]),
            lane(ProjectStatus::Finished, "FINISHED PROJECTS", vec![]),
        ];
        let output = render_board(&lanes, &[], false).unwrap();
        assert!(output.contains("ACTIVE PROJECTS (0)"));
        assert!(output.contains("FINISHED PROJECTS (0)"));
        assert_eq!(output.matches("(no projects)").count(), 2);
        assert!(!output.contains("NEW PROJECT"));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn test_render_cards_aligned() {
        let lanes = vec![lane(
            ProjectStatus::Active,
            "ACTIVE PROJECTS",
            vec![
                card("0123456789ab", "Site", "10man-day", "Landing page"),
                card("fedcba987654", "Docs", "", ""),
            ],
        )];
        let output = render_board(&lanes, &[], false).unwrap();
        let first = output
            .lines()
            .find(|l| l.starts_with("01234567"))
            .unwrap();
        assert!(first.ends_with("10man-day"));
        assert_eq!(first.width(), LINE_WIDTH);
        assert!(output.contains(&format!("{}Landing page", INDENT)));
        assert!(!output.contains("0123456789ab"));
    }

    #[test]
    fn test_render_truncates_long_titles() {
        let long = "x".repeat(TITLE_WIDTH + 10);
        let lanes = vec![lane(
            ProjectStatus::Active,
            "ACTIVE PROJECTS",
            vec![card("01234567", &long, "1man-day", "")],
        )];
        let output = render_board(&lanes, &[], false).unwrap();
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn test_render_form_section() {
        let output = render_board(
            &[],
            &[("title", "Site".to_string()), ("manday", String::new())],
            false,
        )
        .unwrap();
        assert!(output.starts_with("NEW PROJECT\n"));
        assert!(output.contains("title"));
        assert!(output.contains("Site"));
    }

    #[test]
    fn test_render_project_list() {
        let mut project = Project::new("Site".into(), "".into(), 45.0);
        project.id = "abcdef0123".into();
        let output =
            render_project_list(&[project], &EffortUnits::default(), false).unwrap();
        assert_eq!(output, "abcdef01  active    Site (2.25man-month)\n");
    }

    #[test]
    fn test_render_project_list_empty() {
        let output = render_project_list(&[], &EffortUnits::default(), false).unwrap();
        assert_eq!(output, "No projects.\n");
    }

    #[test]
    fn test_render_messages() {
        let output = render_messages(
            &[
                Message::alert("Invalid input, please try again."),
                Message::error("no project matches 'zz'"),
                Message::info("done"),
            ],
            false,
        )
        .unwrap();
        assert_eq!(
            output,
            "alert: Invalid input, please try again.\nerror: no project matches 'zz'\ndone\n"
        );
        assert_eq!(render_messages(&[], false).unwrap(), "");
    }
}
