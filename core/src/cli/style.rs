//! Terminal styling for report output
//!
//! The color sink is handed to the renderer explicitly instead of
//! living in process-wide state; a disabled `Style` yields plain text
//! for piping and for tests.

use colored::Colorize;

/// Color sink for report output
#[derive(Debug, Clone, Copy)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Style that emits uncolored text
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Section headers (yellow, bold)
    pub fn header(&self, text: &str) -> String {
        self.apply(text, |t| t.yellow().bold().to_string())
    }

    /// Informational labels (green)
    pub fn label(&self, text: &str) -> String {
        self.apply(text, |t| t.green().to_string())
    }

    /// Tag names (cyan)
    pub fn tag(&self, text: &str) -> String {
        self.apply(text, |t| t.cyan().to_string())
    }

    /// Ordinary values (white)
    pub fn value(&self, text: &str) -> String {
        self.apply(text, |t| t.white().to_string())
    }

    /// Accented values such as the detected format (yellow)
    pub fn accent(&self, text: &str) -> String {
        self.apply(text, |t| t.yellow().to_string())
    }

    /// GPS values (bright green)
    pub fn gps(&self, text: &str) -> String {
        self.apply(text, |t| t.bright_green().to_string())
    }

    /// Warnings and absence notices (red)
    pub fn warn(&self, text: &str) -> String {
        self.apply(text, |t| t.red().to_string())
    }

    fn apply(&self, text: &str, paint: impl Fn(&str) -> String) -> String {
        if self.enabled {
            paint(text)
        } else {
            text.to_string()
        }
    }
}
