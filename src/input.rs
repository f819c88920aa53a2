//! Single-line input buffer shared by typing and commands
//!
//! - `Key` is the platform-independent keystroke the frontend feeds in
//! - a leading `/` on an empty buffer flips the buffer into command mode
//! - Enter submits the buffered line only in command mode

use std::mem;

use thiserror::Error;

use crate::consts;

/// Keystroke delivered by the frontend after its own key mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
}

/// What the buffered text currently means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Typing,
    Command,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Typing => "typing",
            InputMode::Command => "command",
        }
    }
}

/// Raised when a keystroke would overflow the buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input is full, you cannot type more")]
pub struct InputFullWarning;

/// Outcome of feeding one key into the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    None,
    /// A command line was submitted; the buffer is already cleared
    Submitted(String),
}

/// The single editable line at the bottom of the screen
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    text: String,
    mode: InputMode,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Feed one keystroke. Mode flips and submission happen here; the
    /// caller only ever sees the finished line.
    pub fn push_key(&mut self, key: Key) -> Result<InputEvent, InputFullWarning> {
        match key {
            Key::Backspace => {
                self.text.pop();
                Ok(InputEvent::None)
            }
            Key::Enter => match self.mode {
                InputMode::Command => {
                    let line = mem::take(&mut self.text);
                    self.mode = InputMode::Typing;
                    Ok(InputEvent::Submitted(line))
                }
                // Enter has no meaning while typing at words
                InputMode::Typing => Ok(InputEvent::None),
            },
            Key::Char('/') if self.mode == InputMode::Typing && self.text.is_empty() => {
                self.mode = InputMode::Command;
                Ok(InputEvent::None)
            }
            Key::Char('/') if self.mode == InputMode::Command => {
                self.mode = InputMode::Typing;
                Ok(InputEvent::None)
            }
            Key::Char(c) => {
                if self.text.len() >= consts::INPUT_CAPACITY {
                    return Err(InputFullWarning);
                }
                self.text.push(c);
                Ok(InputEvent::None)
            }
        }
    }

    /// Drop the text but keep the mode (used when a word is destroyed)
    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    /// Back to an empty typing-mode buffer
    pub fn reset(&mut self) {
        self.text.clear();
        self.mode = InputMode::Typing;
    }

    /// The line exactly as the frontend renders it
    pub fn display_line(&self) -> String {
        format!("[ {} ] \"{}\"", self.mode.as_str(), self.text)
    }
}
