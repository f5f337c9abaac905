//! TUI (Terminal User Interface) module for playing Wordle.
//!
//! Full-screen front-end built on Ratatui. The board shows every scored
//! guess as a row of colored cells (green / yellow / gray) plus the row
//! currently being typed.
//!
//! # State Machine
//! - `EnteringGuess`: letters build up the input row; ENTER submits
//! - `GameOver`: the round ended; N starts a new game, ESC quits

use crate::game::{GameInterface, UserAction};
use crate::round::Attempt;
use crate::{GameError, LetterMark, MAX_ATTEMPTS, WORD_LENGTH, debug_log, info_log};
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
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const OUTCOME_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

#[derive(Clone, Copy, PartialEq, Debug)]
enum CellState {
    Empty,
    Entered,
    Exact,   // Green
    Present, // Yellow
    Absent,  // Gray
}

impl CellState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Exact => (Color::Green, Color::Black),
            Self::Present => (Color::Yellow, Color::Black),
            Self::Absent => (Color::Gray, Color::White),
        }
    }

    fn from_mark(mark: LetterMark) -> Self {
        match mark {
            LetterMark::Exact => Self::Exact,
            LetterMark::Present => Self::Present,
            LetterMark::Absent => Self::Absent,
        }
    }
}

#[derive(Debug)]
struct BoardRow {
    letters: [char; WORD_LENGTH],
    states: [CellState; WORD_LENGTH],
}

impl BoardRow {
    fn from_attempt(attempt: &Attempt) -> Self {
        let mut letters = [' '; WORD_LENGTH];
        for (i, ch) in attempt.guess.chars().enumerate().take(WORD_LENGTH) {
            letters[i] = ch;
        }
        let mut states = [CellState::Empty; WORD_LENGTH];
        for (i, mark) in attempt.row.marks().iter().enumerate() {
            states[i] = CellState::from_mark(*mark);
        }
        Self { letters, states }
    }
}

#[derive(Debug)]
enum TuiState {
    EnteringGuess,
    /// Round ended (win or loss) - outcome text stored in interface.message
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too
/// many function arguments.
struct RenderContext<'a> {
    rows: &'a [BoardRow],
    current_input: &'a str,
    state: &'a TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and board display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<BoardRow>,
    current_input: String,
    state: TuiState,
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

        Ok(Self {
            terminal,
            rows: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
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
        let ctx = RenderContext {
            rows: &self.rows,
            current_input: &self.current_input,
            state: &self.state,
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

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Game board
                Constraint::Min(5),     // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.rows, ctx.current_input, ctx.state);
        Self::render_messages(f, chunks[2], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(
        f: &mut Frame,
        area: Rect,
        rows: &[BoardRow],
        current_input: &str,
        state: &TuiState,
    ) {
        let block = Block::default()
            .title(format!("Guesses ({}/{})", rows.len(), MAX_ATTEMPTS))
            .borders(Borders::ALL);

        let inner = block.inner(area);
        f.render_widget(block, area);

        let showing_current_input =
            matches!(state, TuiState::EnteringGuess) && rows.len() < MAX_ATTEMPTS;

        for (row_index, row) in rows.iter().enumerate() {
            Self::render_board_row(f, inner, row_index, &row.letters, &row.states);
        }

        if showing_current_input {
            let mut letters = [' '; WORD_LENGTH];
            for (i, ch) in current_input.chars().enumerate().take(WORD_LENGTH) {
                letters[i] = ch;
            }
            Self::render_board_row(
                f,
                inner,
                rows.len(),
                &letters,
                &[CellState::Entered; WORD_LENGTH],
            );
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_board_row(
        f: &mut Frame,
        area: Rect,
        row_index: usize,
        letters: &[char; WORD_LENGTH],
        states: &[CellState; WORD_LENGTH],
    ) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let (bg_color, fg_color) = states[i].colors();
            spans.push(Span::styled(
                format!(" {} ", letters[i]),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();

        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, OUTCOME_STYLE)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your 5-letter guess | ENTER: Submit | ESC: Quit",
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        // Poll with a timeout so the loop can keep redrawing
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        let Event::Key(key) = event else {
            // Mouse, focus, paste, and resize events carry no action
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid
        // double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Filter out garbage characters that come from terminal escape
        // sequences when alt-tabbing
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}'
                || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD && c != '\t' && c != '\n' && c != '\r')
        {
            debug_log!("handle_input() - Ignoring escape-sequence character: {:?}", c);
            return Ok(None);
        }

        match self.state {
            TuiState::EnteringGuess => Ok(self.handle_guess_input(key)),
            TuiState::GameOver => Ok(Self::handle_game_over_input(key)),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.current_input.len() < WORD_LENGTH => {
                let has_alt = key.modifiers.contains(event::KeyModifiers::ALT);
                let has_ctrl = key.modifiers.contains(event::KeyModifiers::CONTROL);
                if !has_alt && !has_ctrl {
                    self.current_input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == WORD_LENGTH => {
                let guess = self.current_input.clone();
                self.current_input.clear();
                info_log!("handle_guess_input() - Submitting guess '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = format!("Guess must be exactly {WORD_LENGTH} letters!");
            }
            KeyCode::Esc => {
                return Some(UserAction::Exit);
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_guess() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {
                    // No action yet (a letter was typed or the poll timed
                    // out), keep looping
                }
                Err(_e) => {
                    info_log!("read_guess() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_new_round(&mut self, max_attempts: usize) {
        self.rows.clear();
        self.current_input.clear();
        self.message.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringGuess;
        self.status = format!("New round - {max_attempts} attempts to find the word");
        self.draw_or_log();
    }

    fn display_board(&mut self, history: &[Attempt]) {
        self.rows = history.iter().map(BoardRow::from_attempt).collect();
        self.status = format!(
            "{} of {} attempts used",
            history.len(),
            MAX_ATTEMPTS
        );
        self.draw_or_log();
    }

    fn display_invalid_guess(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_win(&mut self, attempts_used: usize) {
        self.state = TuiState::GameOver;
        self.message = format!("You guessed the word in {attempts_used} attempts!");
        self.status = "Round won".to_string();
        self.draw_or_log();
    }

    fn display_loss(&mut self, secret: &str) {
        self.state = TuiState::GameOver;
        self.message = format!("Out of attempts. The secret word was: {secret}");
        self.status = "Round lost".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
