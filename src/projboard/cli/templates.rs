//! # Session Templates
//!
//! Output is rendered from minijinja templates kept in `templates/`, one file
//! per view, included here as string constants.
//!
//! Whitespace is controlled explicitly: every tag trims the source around it
//! and line breaks are written as `{{ "\n" }}`. That keeps the templates
//! readable without stray blank lines leaking into the output.
//!
//! Style selection that depends on data (a lane being a drop target, the lane
//! of a listed project) is resolved in Rust and handed over as a style name.

pub const BOARD_TEMPLATE: &str = include_str!("templates/board.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
