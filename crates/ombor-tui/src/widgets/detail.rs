//! Read-only detail overlay for a single record.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use ombor_core::DetailView;

use crate::theme;

const LABEL_WIDTH: usize = 12;

/// Lines for a detail sheet: section headings followed by label/value rows.
fn detail_lines(detail: &DetailView) -> Vec<Line<'_>> {
    let heading = Style::default()
        .fg(theme::TEAL)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme::MUTED);
    let value = Style::default().fg(theme::TEXT);

    let mut lines = Vec::new();
    for section in &detail.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", section.heading), heading)));
        for row in &section.rows {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:<LABEL_WIDTH$}", row.label), label),
                Span::styled(row.value.as_str(), value),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  e", theme::key_hint_key()),
        Span::styled(" edit  ", theme::key_hint()),
        Span::styled("Esc", theme::key_hint_key()),
        Span::styled(" close", theme::key_hint()),
    ]));
    lines
}

/// Render `detail` centered on `area`.
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let lines = detail_lines(detail);

    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    let overlay_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let overlay_w = 60u16.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(format!(" {} ", detail.title))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        overlay_area,
    );
}
