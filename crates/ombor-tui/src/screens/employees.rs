//! Employees screen: staff roster with create, edit, delete and detail.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use ombor_core::{Collection, CollectionListing, EmployeeCard, Listing};

use crate::action::Action;
use crate::component::Component;
use crate::screens::RowCursor;
use crate::theme;

pub struct EmployeesScreen {
    focused: bool,
    listing: Listing<EmployeeCard>,
    cursor: RowCursor,
}

impl EmployeesScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            listing: Listing::Empty,
            cursor: RowCursor::default(),
        }
    }

    fn selected(&self) -> Option<&EmployeeCard> {
        self.listing.items().get(self.cursor.index())
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.listing {
            Listing::NoMatches { query } => format!("No employees match \"{query}\""),
            Listing::Empty | Listing::Items(_) => "No employees yet. Press n to add one.".into(),
        };
        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
            .split(area);
        frame.render_widget(
            Paragraph::new(text)
                .style(theme::placeholder())
                .alignment(Alignment::Center),
            rows[1],
        );
    }
}

impl Component for EmployeesScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.cursor.navigate(key, self.listing.len()) {
            return Ok(None);
        }

        if key.code == KeyCode::Char('n') {
            return Ok(Some(Action::OpenCreate(Collection::Employees)));
        }

        let Some(id) = self.selected().map(|e| e.id) else {
            return Ok(None);
        };
        Ok(match key.code {
            KeyCode::Enter | KeyCode::Char('v') => {
                Some(Action::OpenDetail(Collection::Employees, id))
            }
            KeyCode::Char('e') => Some(Action::OpenEdit(Collection::Employees, id)),
            KeyCode::Char('d') | KeyCode::Delete => {
                Some(Action::RequestDelete(Collection::Employees, id))
            }
            _ => None,
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ListingUpdated(listing) = action {
            if let CollectionListing::Employees(listing) = listing.as_ref() {
                self.listing = listing.clone();
                self.cursor.clamp(self.listing.len());
            }
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Employees ({}) ", self.listing.len());
        let block = Block::default()
            .title(title)
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

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        if self.listing.is_empty() {
            self.render_placeholder(frame, layout[0]);
        } else {
            let header = Row::new(vec![
                Cell::from("Name").style(theme::table_header()),
                Cell::from("Position").style(theme::table_header()),
                Cell::from("Phone").style(theme::table_header()),
                Cell::from("Salary").style(theme::table_header()),
                Cell::from("Status").style(theme::table_header()),
            ]);

            let selected_idx = self.cursor.index();
            let rows: Vec<Row> = self
                .listing
                .items()
                .iter()
                .enumerate()
                .map(|(i, employee)| {
                    let prefix = if i == selected_idx { "▸" } else { " " };
                    let (dot, status_color) = if employee.status.is_active() {
                        ("●", theme::LEAF_GREEN)
                    } else {
                        ("○", theme::POMEGRANATE)
                    };
                    Row::new(vec![
                        Cell::from(format!("{prefix}{}", employee.name)),
                        Cell::from(employee.position.as_str()),
                        Cell::from(employee.phone.as_str()),
                        Cell::from(employee.salary_display.as_str()).style(theme::amount()),
                        Cell::from(format!("{dot} {}", employee.status_label))
                            .style(Style::default().fg(status_color)),
                    ])
                    .style(theme::table_row())
                })
                .collect();

            let widths = [
                Constraint::Min(18),
                Constraint::Length(16),
                Constraint::Length(19),
                Constraint::Length(18),
                Constraint::Length(10),
            ];

            let table = Table::new(rows, widths)
                .header(header)
                .row_highlight_style(theme::table_selected());

            let mut state = self.cursor.state();
            frame.render_stateful_widget(table, layout[0], &mut state);
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("n ", theme::key_hint_key()),
            Span::styled("new  ", theme::key_hint()),
            Span::styled("e ", theme::key_hint_key()),
            Span::styled("edit  ", theme::key_hint()),
            Span::styled("d ", theme::key_hint_key()),
            Span::styled("delete  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("view", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Employees"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crossterm::event::KeyModifiers;
    use ombor_core::{DataStore, EntityId, ViewController};

    fn press(screen: &mut EmployeesScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .ok()
            .flatten()
    }

    #[test]
    fn no_matches_keeps_query_and_disables_row_keys() {
        let store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let render = ctl.set_search(&store, Collection::Employees, "zzz");

        let mut screen = EmployeesScreen::new();
        let _ = screen.update(&Action::ListingUpdated(Arc::new(render.listing)));

        assert!(matches!(&screen.listing, Listing::NoMatches { query } if query == "zzz"));
        assert!(press(&mut screen, KeyCode::Char('d')).is_none());
    }

    #[test]
    fn end_key_selects_last_employee() {
        let store = DataStore::with_demo_data();
        let render = ViewController::default().render(&store, Collection::Employees);
        let mut screen = EmployeesScreen::new();
        let _ = screen.update(&Action::ListingUpdated(Arc::new(render.listing)));

        press(&mut screen, KeyCode::End);
        assert!(matches!(
            press(&mut screen, KeyCode::Enter),
            Some(Action::OpenDetail(Collection::Employees, id)) if id == EntityId::from(4)
        ));
    }
}
