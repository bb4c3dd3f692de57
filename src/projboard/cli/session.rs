use super::render::{render_board, render_messages, render_project_list, Message};
use super::setup::{parse_line, session_help, SessionCommand};
use projboard::app::Board;
use projboard::dom::markup;
use projboard::error::{BoardError, Result};
use projboard::model::{Project, ProjectStatus};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A line-oriented session over a mounted board.
pub struct Session<W: Write> {
    board: Board,
    out: W,
    use_color: bool,
    prompt: bool,
}

impl<W: Write> Session<W> {
    pub fn new(board: Board, out: W, use_color: bool) -> Self {
        Self {
            board,
            out,
            use_color,
            prompt: false,
        }
    }

    /// Prints `> ` before each command (for interactive terminals).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Draws the board, then executes commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.draw(false)?;
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.execute_line(&line?)? == Flow::Quit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Runs one input line. Only failures of the board itself are returned;
    /// bad input is reported and the session goes on.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(message) => {
                write!(self.out, "{}", message)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "session command");

        let flow = match self.execute(command) {
            Ok(flow) => flow,
            Err(BoardError::Session(message)) => {
                self.print(&[Message::error(message)])?;
                Flow::Continue
            }
            Err(e) => return Err(e),
        };
        self.flush_alerts()?;
        Ok(flow)
    }

    fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Fill { field, value } => self
                .board
                .fill(field.key(), value.as_deref().unwrap_or(""))?,
            SessionCommand::Submit => self.submit()?,
            SessionCommand::Add {
                title,
                effort,
                description,
            } => {
                self.board.fill(markup::TITLE_INPUT_ID, &title)?;
                self.board
                    .fill(markup::DESCRIPTION_INPUT_ID, description.as_deref().unwrap_or(""))?;
                self.board.fill(markup::EFFORT_INPUT_ID, &effort)?;
                self.submit()?;
            }
            SessionCommand::Drag { id, lane } => self.drag(&id, lane)?,
            SessionCommand::Show => self.draw(true)?,
            SessionCommand::List { lane, json } => self.list(lane, json)?,
            SessionCommand::Help => write!(self.out, "{}", session_help())?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn submit(&mut self) -> Result<()> {
        let before = self.board.store().len();
        self.board.submit()?;
        if self.board.store().len() != before {
            self.flush_alerts()?;
            self.draw(false)?;
        }
        Ok(())
    }

    fn drag(&mut self, prefix: &str, lane: ProjectStatus) -> Result<()> {
        let id = self.board.resolve_id(prefix)?;
        if self.board.drag(&id, lane)? {
            self.draw(false)
        } else {
            let title = self
                .board
                .store()
                .find(&id)
                .map(|p| p.title)
                .unwrap_or_default();
            self.print(&[Message::info(format!("'{}' is already {}", title, lane))])
        }
    }

    fn list(&mut self, lane: Option<ProjectStatus>, json: bool) -> Result<()> {
        let lanes = match lane {
            Some(lane) => vec![lane],
            None => ProjectStatus::ALL.to_vec(),
        };
        let mut projects: Vec<Project> = Vec::new();
        for lane in lanes {
            projects.extend(self.board.lane_items(lane)?);
        }

        if json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(&projects)?)?;
        } else {
            let output = render_project_list(
                &projects,
                &self.board.config().effort_units,
                self.use_color,
            )?;
            write!(self.out, "{}", output)?;
        }
        Ok(())
    }

    fn draw(&mut self, with_form: bool) -> Result<()> {
        let form = if with_form {
            self.board.form_values()?
        } else {
            Vec::new()
        };
        let output = render_board(&self.board.lanes()?, &form, self.use_color)?;
        write!(self.out, "{}", output)?;
        Ok(())
    }

    fn flush_alerts(&mut self) -> Result<()> {
        let alerts: Vec<Message> = self
            .board
            .take_alerts()
            .into_iter()
            .map(Message::alert)
            .collect();
        self.print(&alerts)
    }

    fn print(&mut self, messages: &[Message]) -> Result<()> {
        let output = render_messages(messages, self.use_color)?;
        write!(self.out, "{}", output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projboard::config::BoardConfig;

    fn session() -> Session<Vec<u8>> {
        Session::new(Board::mount(BoardConfig::default()).unwrap(), Vec::new(), false)
    }

    fn run(session: &mut Session<Vec<u8>>, lines: &[&str]) -> String {
        session.out.clear();
        for line in lines {
            if session.execute_line(line).unwrap() == Flow::Quit {
                break;
            }
        }
        String::from_utf8(session.out.clone()).unwrap()
    }

    #[test]
    fn test_add_draws_board() {
        let mut s = session();
        let out = run(&mut s, &["add Site 10 'Landing page'"]);
        assert!(out.contains("ACTIVE PROJECTS (1)"));
        assert!(out.contains("Site"));
        assert!(out.contains("10man-day"));
        assert!(out.contains("Landing page"));
        assert_eq!(s.board().store().len(), 1);
    }

    #[test]
    fn test_fill_then_submit() {
        let mut s = session();
        let out = run(
            &mut s,
            &["fill title Docs", "fill manday 25", "submit", "list --json"],
        );
        assert!(out.contains("1.25man-month"));
        assert!(out.contains("\"status\": \"active\""));
    }

    #[test]
    fn test_invalid_submit_alerts() {
        let mut s = session();
        let out = run(&mut s, &["add '' 5"]);
        assert_eq!(out, "alert: Invalid input, please try again.\n");
        assert!(s.board().store().is_empty());
    }

    #[test]
    fn test_drag_by_prefix() {
        let mut s = session();
        run(&mut s, &["add A 1", "add B 2"]);
        let id = s.board().store().snapshot()[0].id.clone();
        let out = run(&mut s, &[&format!("drag {} finished", &id[..6])]);
        assert!(out.contains("ACTIVE PROJECTS (1)"));
        assert!(out.contains("FINISHED PROJECTS (1)"));
        assert_eq!(
            s.board().lane_items(ProjectStatus::Finished).unwrap()[0].id,
            id
        );
    }

    #[test]
    fn test_drag_to_same_lane_reports() {
        let mut s = session();
        run(&mut s, &["add A 1"]);
        let id = s.board().store().snapshot()[0].id.clone();
        let out = run(&mut s, &[&format!("drag {} active", id)]);
        assert_eq!(out, "'A' is already active\n");
    }

    #[test]
    fn test_unknown_id_is_reported() {
        let mut s = session();
        let out = run(&mut s, &["drag zzz finished"]);
        assert_eq!(out, "error: no project matches 'zzz'\n");
    }

    #[test]
    fn test_bad_command_continues() {
        let mut s = session();
        let out = run(&mut s, &["launch", "add A 1"]);
        assert!(out.contains("launch"));
        assert_eq!(s.board().store().len(), 1);
    }

    #[test]
    fn test_quit_stops() {
        let mut s = session();
        run(&mut s, &["quit", "add A 1"]);
        assert!(s.board().store().is_empty());
    }

    #[test]
    fn test_show_includes_form() {
        let mut s = session();
        let out = run(&mut s, &["fill title Draft", "show"]);
        assert!(out.contains("NEW PROJECT"));
        assert!(out.contains("Draft"));
    }

    #[test]
    fn test_list_lane_text() {
        let mut s = session();
        run(&mut s, &["add A 1", "add B 2"]);
        let out = run(&mut s, &["list finished"]);
        assert_eq!(out, "No projects.\n");
        let out = run(&mut s, &["ls"]);
        assert_eq!(out.lines().count(), 2);
    }
}
