//! Ratatui style definitions for the post list
use ratatui::style::{Color, Modifier, Style};

/// Header title in bright cyan bold
pub const HEADER_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Loading placeholder in dim italics
pub const LOADING: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::ITALIC);

/// Post titles in white
pub const POST_ITEM: Style = Style::new().fg(Color::White);

/// Highlighted selection in green bold reversed
pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Green)
    .add_modifier(Modifier::BOLD.union(Modifier::REVERSED));

/// Footer hint text
pub const HINT: Style = Style::new().fg(Color::DarkGray);
