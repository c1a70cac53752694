//! Terminal colors and styling for CLI output.

use colored::Colorize;

/// Message type for different levels of output
#[derive(Debug, Clone, Copy)]
pub enum MessageType {
    Success,
    Warning,
    Hint,
}

impl MessageType {
    /// Apply color to a message based on its type
    pub fn colorize(&self, message: &str) -> String {
        match self {
            MessageType::Success => message.green().to_string(),
            MessageType::Warning => message.yellow().to_string(),
            MessageType::Hint => message.dimmed().to_string(),
        }
    }

    /// Get the prefix for this message type
    pub fn prefix(&self) -> &str {
        match self {
            MessageType::Success => "✓",
            MessageType::Warning => "⚠",
            MessageType::Hint => "💡",
        }
    }

    /// Format a message with prefix and color
    pub fn format(&self, message: &str) -> String {
        format!("{} {}", self.prefix(), self.colorize(message))
    }
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{}", MessageType::Success.format(message));
}

/// Print a warning message (yellow) to stderr
pub fn warning(message: &str) {
    eprintln!("{}", MessageType::Warning.format(message));
}

/// Print a hint message (dimmed)
pub fn hint(message: &str) {
    println!("{}", MessageType::Hint.format(message));
}

/// Print a header/title (bold, cyan)
pub fn header(message: &str) {
    println!("{}", message.bold().cyan());
}
