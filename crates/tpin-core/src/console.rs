//! Terminal input/output as seen by the controller.

use crate::error::PinResult;

/// A key press, reduced to what the session menu distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    CtrlC,
    Up,
    Down,
    Other,
}

/// The interactive terminal.
///
/// `read_key` and `confirm` run in raw mode; `read_line` leaves raw mode
/// for the duration of the prompt.
pub trait Console {
    /// Block until the next key press.
    fn read_key(&mut self) -> PinResult<Key>;

    /// Prompt for a line of text; the result is trimmed.
    fn read_line(&mut self, prompt: &str) -> PinResult<String>;

    /// Show `prompt` and wait for one key. Only Enter confirms.
    fn confirm(&mut self, prompt: &str) -> PinResult<bool>;

    /// Clear the screen and draw `screen`.
    fn draw(&mut self, screen: &str) -> PinResult<()>;
}
