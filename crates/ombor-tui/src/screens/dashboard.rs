//! Dashboard screen: headline counters for stock and staff.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use ombor_core::{DashboardSummary, format_amount};

use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;

pub struct DashboardScreen {
    focused: bool,
    summary: DashboardSummary,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            summary: DashboardSummary::default(),
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, title: &str, value: usize, color: Color) {
        let block = Block::default()
            .title(format!(" {title} "))
            .title_style(Style::default().fg(theme::TEXT))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
            .split(inner);
        let value = Paragraph::new(Line::from(Span::styled(
            format_amount(u64::try_from(value).unwrap_or(u64::MAX)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(value, rows[1]);
    }
}

impl Component for DashboardScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Char('p') => Some(Action::SwitchScreen(ScreenId::Products)),
            KeyCode::Char('e') => Some(Action::SwitchScreen(ScreenId::Employees)),
            _ => None,
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::SummaryUpdated(summary) = action {
            self.summary = *summary;
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Dashboard ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let s = &self.summary;
        if inner.width < 48 || inner.height < 8 {
            let line = format!(
                "Products: {}/{} in stock │ Employees: {}/{} active",
                s.available_products, s.total_products, s.active_employees, s.total_employees
            );
            frame.render_widget(Paragraph::new(line).style(theme::table_row()), inner);
            return;
        }

        let layout = Layout::vertical([
            Constraint::Length(5), // cards
            Constraint::Min(1),
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(layout[0]);
        Self::render_card(frame, cards[0], "Products", s.total_products, theme::SAFFRON);
        Self::render_card(frame, cards[1], "In stock", s.available_products, theme::LEAF_GREEN);
        Self::render_card(frame, cards[2], "Employees", s.total_employees, theme::LAPIS);
        Self::render_card(frame, cards[3], "Active", s.active_employees, theme::TEAL);

        let hints = Line::from(vec![
            Span::styled("  p ", theme::key_hint_key()),
            Span::styled("products  ", theme::key_hint()),
            Span::styled("e ", theme::key_hint_key()),
            Span::styled("employees", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Dashboard"
    }
}
