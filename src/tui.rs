//! TUI (Terminal User Interface) for interactive grid queries
//!
//! Renders the grid with Ratatui and highlights the path of the last word
//! found. The user types one or more words and presses ENTER; the session
//! loop in [`crate::session`] drives this through [`SearchInterface`].

use crate::cli::parse_action;
use crate::grid::Grid;
use crate::knight::{Coord, GRID_SIZE, format_path};
use crate::session::{SearchInterface, SearchReport, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_INPUT_LEN: usize = 120;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const CELL_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const PATH_START_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
const PATH_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);

/// Everything the renderer needs, borrowed from the interface.
struct RenderContext<'a> {
    cells: Option<&'a [[char; GRID_SIZE]; GRID_SIZE]>,
    path: &'a [Coord],
    current_input: &'a str,
    report: Option<&'a SearchReport>,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    cells: Option<[[char; GRID_SIZE]; GRID_SIZE]>,
    current_input: String,
    report: Option<SearchReport>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            cells: None,
            current_input: String::new(),
            report: None,
            message: String::new(),
            error_message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let path: &[Coord] = match &self.report {
            Some(SearchReport::Found(found)) => &found.path,
            _ => &[],
        };
        let ctx = RenderContext {
            cells: self.cells.as_ref(),
            path,
            current_input: &self.current_input,
            report: self.report.as_ref(),
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                     // Title
                Constraint::Length(GRID_SIZE as u16 + 3), // Board plus column header
                Constraint::Min(6),                        // Result panel
                Constraint::Length(3),                     // Input line
                Constraint::Length(3),                     // Status
                Constraint::Length(3),                     // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.cells, ctx.path);
        Self::render_info(f, chunks[2], ctx.report, ctx.message, ctx.error_message);
        Self::render_input(f, chunks[3], ctx.current_input);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("KNIGHT SEARCH")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(
        f: &mut Frame,
        area: Rect,
        cells: Option<&[[char; GRID_SIZE]; GRID_SIZE]>,
        path: &[Coord],
    ) {
        let mut lines = Vec::with_capacity(GRID_SIZE + 1);
        let header: String = (0..GRID_SIZE).map(|col| format!(" {col} ")).collect();
        lines.push(Line::from(format!("    {header}")));

        if let Some(cells) = cells {
            for (row, letters) in cells.iter().enumerate() {
                let mut spans = vec![Span::raw(format!(" {row}  "))];
                for (col, letter) in letters.iter().enumerate() {
                    let style = Self::cell_style(Coord::new(row, col), path);
                    spans.push(Span::styled(format!(" {letter} "), style));
                }
                lines.push(Line::from(spans));
            }
        }

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Grid").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn cell_style(coord: Coord, path: &[Coord]) -> Style {
        match path.iter().position(|step| *step == coord) {
            Some(0) => PATH_START_STYLE,
            Some(_) => PATH_STYLE,
            None => CELL_STYLE,
        }
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        report: Option<&SearchReport>,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        match report {
            Some(SearchReport::Found(found)) => {
                lines.push(Line::from(vec![Span::styled(
                    format!("Found: {} ({} letters)", found.word, found.path.len()),
                    SUCCESS_STYLE,
                )]));
                lines.push(Line::from(format!("  {}", format_path(&found.path))));
                lines.push(Line::from(""));
            }
            Some(SearchReport::Missing { words }) => {
                lines.push(Line::from(vec![Span::styled(
                    format!("No path for: {}", words.join(", ")),
                    ERROR_STYLE,
                )]));
                lines.push(Line::from(""));
            }
            None => {}
        }

        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Result").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
        let paragraph = Paragraph::new(format!("> {current_input}_"))
            .block(Block::default().title("Words").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let paragraph = Paragraph::new(status)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(
            "Type words separated by spaces | 'trace exit': search a reserved word | \
             ENTER: Search | BACKSPACE: Delete | ESC: Quit",
        )
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(self.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_key() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Enter => {
                let action = parse_action(&self.current_input);
                if action.is_none() {
                    self.error_message = "Enter at least one word.".to_string();
                }
                self.current_input.clear();
                action
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Char(c) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_key() - Ignoring '{}' with modifiers", c);
                None
            }
            KeyCode::Char(c) if c.is_alphabetic() || c == ' ' => {
                if self.current_input.chars().count() < MAX_INPUT_LEN {
                    self.current_input.push(c);
                }
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters and spaces are allowed! ('{c}')");
                None
            }
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }
}

impl SearchInterface for TuiInterface {
    fn display_grid(&mut self, grid: &Grid) {
        self.cells = Some(*grid.cells());
        self.report = None;
        self.status = "Enter words to trace on the grid".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_report(&mut self, report: &SearchReport) {
        self.status = match report {
            SearchReport::Found(found) => format!("Traced '{}'", found.word),
            SearchReport::Missing { .. } => "No traceable word".to_string(),
        };
        self.report = Some(report.clone());
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
