//! Narrator configuration.

use serde::Deserialize;

/// Configuration for how narration is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NarratorConfig {
    /// Column at which paragraphs wrap. Zero disables wrapping.
    pub wrap_width: usize,
    /// Style headings and echoed commands with ANSI colors.
    pub color: bool,
    /// Marker placed before each item in nested descriptions.
    pub bullet: String,
    /// Spaces per nesting level in nested descriptions.
    pub indent: usize,
    /// Write each resolved command to the transcript as `> command`.
    pub echo_commands: bool,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            wrap_width: 72,
            color: false,
            bullet: "-".to_string(),
            indent: 2,
            echo_commands: true,
        }
    }
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap width.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Enable or disable color.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the bullet marker.
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }

    /// Set the indent per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enable or disable command echoing.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo_commands = echo;
        self
    }
}
