//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::{
    fmt,
    io::{self, Write},
};

use anyhow::Result;
use checkwise_core::Notice;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
#[derive(Clone)]
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    to_stderr: bool,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            skin,
            to_stderr: false,
        }
    }

    /// Same styling, written to stderr so stdout stays free for data.
    pub fn on_stderr(&self) -> Self {
        Self {
            to_stderr: true,
            ..self.clone()
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks
            for line in markdown.lines() {
                if line.starts_with('#') {
                    self.write(format_args!("\x1b[34m{line}\x1b[0m\n"))?;
                } else {
                    self.write(format_args!("{}\n", self.skin.inline(line)))?;
                }
            }
        } else {
            self.write(format_args!("{markdown}"))?;
        }
        Ok(())
    }

    /// Render a notice, in green or red when rich output is enabled
    pub fn render_notice(&self, notice: &Notice) -> Result<()> {
        if self.rich_enabled {
            let color = if notice.success { 32 } else { 31 };
            self.write(format_args!("\x1b[{color}m{notice}\x1b[0m"))?;
        } else {
            self.write(format_args!("{notice}"))?;
        }
        Ok(())
    }

    fn write(&self, text: fmt::Arguments<'_>) -> io::Result<()> {
        if self.to_stderr {
            io::stderr().lock().write_fmt(text)
        } else {
            io::stdout().lock().write_fmt(text)
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
