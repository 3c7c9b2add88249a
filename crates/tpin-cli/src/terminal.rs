//! Terminal utilities: raw mode, key reading, prompts.
//!
//! Wraps crossterm's terminal operations and provides a RAII guard that
//! automatically restores the terminal state on drop.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use dialoguer::Input;
use tpin_core::{Console, Key, PinError, PinResult};

/// RAII guard that restores the terminal to its original mode on drop.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enter raw terminal mode.
    ///
    /// Returns a guard that will automatically restore the terminal when dropped.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Restore cooked mode outside of any guard, e.g. from a signal handler.
pub fn restore() {
    let _ = terminal::disable_raw_mode();
}

/// Translate a crossterm key event into a menu key.
pub fn translate(event: &KeyEvent) -> Key {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::CtrlC,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => Key::Other,
    }
}

fn term_err(e: impl std::fmt::Display) -> PinError {
    PinError::Terminal(e.to_string())
}

/// The real terminal: stdout for drawing, crossterm events for keys.
#[derive(Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }

    /// Clear the screen, leaving the cursor at the top-left corner.
    pub fn clear(&mut self) -> PinResult<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)).map_err(term_err)
    }
}

impl Console for TerminalConsole {
    fn read_key(&mut self) -> PinResult<Key> {
        loop {
            match event::read().map_err(term_err)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(translate(&key)),
                _ => {}
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> PinResult<String> {
        terminal::disable_raw_mode().map_err(term_err)?;
        let input = Input::<String>::new()
            .with_prompt(prompt.trim_end().trim_end_matches(':'))
            .allow_empty(true)
            .interact_text();
        terminal::enable_raw_mode().map_err(term_err)?;
        Ok(input.map_err(term_err)?.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> PinResult<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}").map_err(term_err)?;
        stdout.flush().map_err(term_err)?;
        Ok(self.read_key()? == Key::Enter)
    }

    fn draw(&mut self, screen: &str) -> PinResult<()> {
        let mut stdout = io::stdout();
        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0)).map_err(term_err)?;
        stdout.write_all(screen.as_bytes()).map_err(term_err)?;
        stdout.flush().map_err(term_err)
    }
}
