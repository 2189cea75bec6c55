//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

/// How a single markdown line should be printed.
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Header,
    Fence,
    Code,
    Text,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for (line, kind) in classify_lines(markdown) {
            match kind {
                LineKind::Header => println!("\x1b[34m{line}\x1b[0m"),
                LineKind::Fence => println!("\x1b[90m{line}\x1b[0m"),
                // Commands and config files are printed verbatim so they can
                // be copied as-is.
                LineKind::Code => println!("{line}"),
                LineKind::Text => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Tags each line, tracking whether it sits inside a fenced code block.
fn classify_lines(markdown: &str) -> Vec<(&str, LineKind)> {
    let mut in_code = false;
    markdown
        .lines()
        .map(|line| {
            let kind = if line.starts_with("```") {
                in_code = !in_code;
                LineKind::Fence
            } else if in_code {
                LineKind::Code
            } else if line.starts_with('#') {
                LineKind::Header
            } else {
                LineKind::Text
            };
            (line, kind)
        })
        .collect()
}
