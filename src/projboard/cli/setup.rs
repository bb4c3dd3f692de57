use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use projboard::dom::markup;
use projboard::model::ProjectStatus;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "projboard", bin_name = "projboard", version)]
#[command(about = "Two-lane project board for the terminal", long_about = None)]
pub struct Cli {
    /// Board configuration file (JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of session input.
#[derive(Parser, Debug)]
#[command(
    name = "projboard",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormField {
    Title,
    Description,
    #[value(alias = "effort")]
    Manday,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Title => markup::TITLE_INPUT_ID,
            FormField::Description => markup::DESCRIPTION_INPUT_ID,
            FormField::Manday => markup::EFFORT_INPUT_ID,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Type a value into a form field
    #[command(alias = "f")]
    Fill {
        /// Field to fill
        field: FormField,

        /// New value (omit to clear the field)
        value: Option<String>,
    },

    /// Submit the form
    Submit,

    /// Fill the form and submit it
    #[command(alias = "a")]
    Add {
        /// Project title
        title: String,

        /// Effort in man-days
        effort: String,

        /// Project description
        description: Option<String>,
    },

    /// Drag a project onto a lane
    #[command(alias = "mv")]
    Drag {
        /// Project id or a unique prefix of it
        id: String,

        /// Target lane (active, finished)
        lane: ProjectStatus,
    },

    /// Draw the board, including the form
    Show,

    /// List projects in display order
    #[command(alias = "ls")]
    List {
        /// Only this lane
        lane: Option<ProjectStatus>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show available commands
    #[command(alias = "?")]
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
///
/// The error is ready to print: a quoting problem, or clap's own message for
/// unknown commands and bad arguments.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let words = shlex::split(trimmed).ok_or_else(|| "error: unbalanced quotes\n".to_string())?;
    SessionLine::try_parse_from(words)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| e.render().to_string())
}

pub fn session_help() -> String {
    SessionLine::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# setup").unwrap(), None);
    }

    #[test]
    fn test_fill_with_quoted_value() {
        assert_eq!(
            parse(r#"fill description "Landing page, v2""#),
            SessionCommand::Fill {
                field: FormField::Description,
                value: Some("Landing page, v2".into())
            }
        );
        assert_eq!(
            parse("fill effort 5"),
            SessionCommand::Fill {
                field: FormField::Manday,
                value: Some("5".into())
            }
        );
    }

    #[test]
    fn test_add_with_optional_description() {
        assert_eq!(
            parse("add 'Site' 10"),
            SessionCommand::Add {
                title: "Site".into(),
                effort: "10".into(),
                description: None
            }
        );
    }

    #[test]
    fn test_drag_parses_lane() {
        assert_eq!(
            parse("mv 3f2a done"),
            SessionCommand::Drag {
                id: "3f2a".into(),
                lane: ProjectStatus::Finished
            }
        );
    }

    #[test]
    fn test_list_flags() {
        assert_eq!(
            parse("ls active --json"),
            SessionCommand::List {
                lane: Some(ProjectStatus::Active),
                json: true
            }
        );
        assert_eq!(parse("exit"), SessionCommand::Quit);
    }

    #[test]
    fn test_errors_are_printable() {
        assert!(parse_line("frobnicate").unwrap_err().contains("frobnicate"));
        assert!(parse_line("drag abc sideways").is_err());
        assert!(parse_line("fill title 'open").unwrap_err().contains("quotes"));
    }

    #[test]
    fn test_help_lists_commands() {
        let help = session_help();
        assert!(help.contains("drag"));
        assert!(help.contains("submit"));
    }
}
