//! TUI application state and logic

use crate::game::{Game, GameStatus, Key, Statistics};
use crate::output::formatters::capitalize;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a, R: Rng> {
    pub game: Game<'a, R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(game: Game<'a, R>) -> Self {
        Self {
            game,
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace to delete, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Translate a terminal key press into a game key code and feed it to the game
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.game.status().is_finished() {
            if matches!(key.code, KeyCode::Char('n' | 'N') | KeyCode::Enter) {
                self.new_game();
            }
            return;
        }

        let code = match key.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => Key::Enter.code(),
            KeyCode::Backspace | KeyCode::Delete => Key::Delete.code(),
            _ => return,
        };

        self.handle_code(&code);
    }

    /// Feed one symbolic key code; rejected guesses become error messages
    pub fn handle_code(&mut self, code: &str) {
        match self.game.handle_code(code) {
            Ok(Some(_)) => self.after_submit(),
            Ok(None) => {}
            Err(err) => {
                let text = err.to_string();
                self.add_message(&capitalize(&text), MessageStyle::Error);
            }
        }
    }

    fn after_submit(&mut self) {
        let status = self.game.status();
        let attempts = self.game.attempts_used();
        self.stats.record(status, attempts);

        match status {
            GameStatus::Won => {
                let plural = if attempts == 1 { "" } else { "s" };
                let celebration =
                    format!("🎉 Congrats! You got it right in {attempts} attempt{plural}!");
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                let text = format!(
                    "Too bad. The word was {}. Try again!",
                    self.game.secret().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        debug!("new game from TUI");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
