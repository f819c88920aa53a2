//! Transient status line for warnings and command feedback
//!
//! One message at a time; a new message replaces the old one and
//! restarts the display window.

use crate::consts;

#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    current: Option<(String, u64)>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` starting at the given wall tick
    pub fn set(&mut self, text: impl Into<String>, now: u64) {
        self.current = Some((text.into(), now));
    }

    /// The message, if it is still inside its display window
    pub fn message(&self, now: u64) -> Option<&str> {
        match &self.current {
            Some((text, since)) if now.saturating_sub(*since) < consts::STATUS_TICKS => {
                Some(text.as_str())
            }
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
