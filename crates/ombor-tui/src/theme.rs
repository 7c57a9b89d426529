//! Palette and semantic styles for the dashboard.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const SAFFRON: Color = Color::Rgb(244, 180, 0); // #f4b400
pub const TEAL: Color = Color::Rgb(64, 196, 190); // #40c4be
pub const LAPIS: Color = Color::Rgb(94, 129, 244); // #5e81f4
pub const POMEGRANATE: Color = Color::Rgb(232, 72, 85); // #e84855
pub const LEAF_GREEN: Color = Color::Rgb(106, 199, 106); // #6ac76a

// ── Neutrals ──────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(214, 214, 206); // #d6d6ce
pub const MUTED: Color = Color::Rgb(120, 124, 138); // #787c8a
pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 46, 58); // #2c2e3a
pub const BG_DARK: Color = Color::Rgb(28, 29, 36); // #1c1d24

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(TEAL)
}

pub fn border_default() -> Style {
    Style::default().fg(MUTED)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(SAFFRON)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn table_row() -> Style {
    Style::default().fg(TEXT)
}

pub fn table_selected() -> Style {
    Style::default()
        .fg(TEAL)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_active() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(TEXT)
}

/// Money amounts in tables and detail sheets.
pub fn amount() -> Style {
    Style::default().fg(LAPIS)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
}

/// Placeholder text for an empty or filtered-out table.
pub fn placeholder() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}
