//! Terminal rendering module for rich markdown output
//!
//! This module renders reports with termimad, falls back to plain markdown
//! text when color is disabled, and emits JSON when requested.

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled markdown via termimad
    Rich,
    /// Markdown text as-is
    Plain,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Picks the format from the global CLI flags; `--json` wins.
    pub fn from_flags(no_color: bool, json: bool) -> Self {
        match (json, no_color) {
            (true, _) => Self::Json,
            (false, true) => Self::Plain,
            (false, false) => Self::Rich,
        }
    }
}

/// Terminal renderer that can switch between rich, plain and JSON output
pub struct TerminalRenderer {
    format: OutputFormat,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(format: OutputFormat) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { format, skin }
    }

    /// Render a value as markdown, or as JSON in JSON mode
    pub fn render<T: Display + Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(value)
                    .context("Failed to serialize output")?;
                println!("{json}");
                Ok(())
            }
            _ => self.render_markdown(&value.to_string()),
        }
    }

    /// Render markdown text to terminal
    pub fn render_markdown(&self, markdown: &str) -> Result<()> {
        if self.format != OutputFormat::Rich {
            print!("{markdown}");
            return Ok(());
        }

        // Tables need the whole block at once to compute column widths
        let mut table = String::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push_str(line);
                table.push('\n');
                continue;
            }
            self.flush_table(&mut table);

            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        self.flush_table(&mut table);
        Ok(())
    }

    fn flush_table(&self, table: &mut String) {
        if !table.is_empty() {
            self.skin.print_text(table);
            table.clear();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(OutputFormat::Rich)
    }
}
