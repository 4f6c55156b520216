//! Ratatui terminal UI for scoring poker-dice rolls.
//!
//! Layout mirrors the classic form: a heading, an input field, a result
//! line, and a scrollable history of previous rolls with a 1-based counter.

mod history;

pub use history::{History, HistoryEntry};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::{Frame, Terminal};

use pd_core::{classify, parse_tokens, validate_and_sort_ints, Dice};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Idle,
    Result(String),
    Error(String),
}

struct App {
    input: String,
    status: Status,
    history: History,
}

impl Default for App {
    fn default() -> Self {
        Self {
            input: String::new(),
            status: Status::Idle,
            history: History::new(),
        }
    }
}

fn format_results(dice: &Dice) -> String {
    let faces: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
    format!("Dice game results: {}", faces.join(" "))
}

impl App {
    /// Score the current input line: parse, validate, classify. On success
    /// the result joins the history and the input clears; on error the
    /// input stays so the user can fix it.
    fn submit(&mut self) {
        let tokens: Vec<&str> = self.input.split_whitespace().collect();
        if tokens.is_empty() {
            return;
        }
        let outcome = parse_tokens(&tokens)
            .map_err(|e| e.to_string())
            .and_then(|values| validate_and_sort_ints(&values).map_err(|e| e.to_string()));
        match outcome {
            Ok(dice) => {
                let line = format!("{} {}", classify(dice).message(), format_results(&dice));
                let roll_no = self.history.push(line.clone());
                self.status = Status::Result(format!("Roll {roll_no}: {line}"));
                self.input.clear();
            }
            Err(msg) => {
                self.status = Status::Error(format!("{msg} Try again."));
            }
        }
    }
}

/// Enter the TUI: raw mode + alternate screen, event loop, restore on exit.
pub fn run() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Windows terminals also deliver Release events.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(ch) => app.input.push(ch),
                _ => {}
            }
        }
    }
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(3), // input
            Constraint::Length(1), // status
            Constraint::Min(3),    // history
            Constraint::Length(1), // key hints
        ])
        .split(f.area());

    let heading = Paragraph::new("Roll five dice, then enter the results separated by spaces:")
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(heading, chunks[0]);

    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().borders(Borders::ALL).title("Input"));
    f.render_widget(input, chunks[1]);

    let status = match &app.status {
        Status::Idle => Line::from(Span::styled(
            "Enter a roll to score it.",
            Style::default().fg(Color::DarkGray),
        )),
        Status::Result(msg) => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Green),
        )),
        Status::Error(msg) => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
        }
    };
    f.render_widget(Paragraph::new(status), chunks[2]);

    // Newest roll first.
    let items: Vec<ListItem> = app
        .history
        .entries()
        .iter()
        .rev()
        .map(|e| ListItem::new(e.display_line()))
        .collect();
    let history = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));
    f.render_widget(history, chunks[3]);

    let hints = Paragraph::new("Enter: score    Backspace: edit    Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[4]);
}
