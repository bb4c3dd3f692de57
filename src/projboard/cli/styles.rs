use console::Style;
use once_cell::sync::Lazy;
use stencil::Palette;

pub mod names {
    pub const LANE_TITLE: &str = "lane_title";
    pub const LANE_DROPPABLE: &str = "lane_droppable";
    pub const RULE: &str = "rule";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const EFFORT: &str = "effort";
    pub const DESCRIPTION: &str = "description";
    pub const EMPTY: &str = "empty";
    pub const FORM_HEADING: &str = "form_heading";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const LANE_ACTIVE: &str = "lane_active";
    pub const LANE_FINISHED: &str = "lane_finished";
    pub const ALERT: &str = "alert";
    pub const ERROR: &str = "error";
    pub const INFO: &str = "info";
}

pub static BOARD_PALETTE: Lazy<Palette> = Lazy::new(|| {
    Palette::new()
        .add(names::LANE_TITLE, Style::new().bold())
        .add(names::LANE_DROPPABLE, Style::new().bold().cyan())
        .add(names::RULE, Style::new().color256(245))
        .add(names::ID, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::EFFORT, Style::new().color256(245).italic())
        .add(names::DESCRIPTION, Style::new())
        .add(names::EMPTY, Style::new().color256(245).italic())
        .add(names::FORM_HEADING, Style::new().bold().underlined())
        .add(names::LABEL, Style::new().color256(245))
        .add(names::VALUE, Style::new())
        .add(names::LANE_ACTIVE, Style::new().green())
        .add(names::LANE_FINISHED, Style::new().blue())
        .add(names::ALERT, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red())
        .add(names::INFO, Style::new().color256(245))
});
