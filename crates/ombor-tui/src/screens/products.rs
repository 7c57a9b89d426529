//! Products screen: inventory table with create, edit, delete and detail.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use ombor_core::{Collection, CollectionListing, Listing, ProductCard};

use crate::action::Action;
use crate::component::Component;
use crate::screens::RowCursor;
use crate::theme;

pub struct ProductsScreen {
    focused: bool,
    listing: Listing<ProductCard>,
    cursor: RowCursor,
}

impl ProductsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            listing: Listing::Empty,
            cursor: RowCursor::default(),
        }
    }

    fn selected(&self) -> Option<&ProductCard> {
        self.listing.items().get(self.cursor.index())
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.listing {
            Listing::NoMatches { query } => format!("No products match \"{query}\""),
            Listing::Empty | Listing::Items(_) => "No products yet. Press n to add one.".into(),
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

impl Component for ProductsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.cursor.navigate(key, self.listing.len()) {
            return Ok(None);
        }

        if key.code == KeyCode::Char('n') {
            return Ok(Some(Action::OpenCreate(Collection::Products)));
        }

        let Some(id) = self.selected().map(|p| p.id) else {
            return Ok(None);
        };
        Ok(match key.code {
            KeyCode::Enter | KeyCode::Char('v') => Some(Action::OpenDetail(Collection::Products, id)),
            KeyCode::Char('e') => Some(Action::OpenEdit(Collection::Products, id)),
            KeyCode::Char('d') | KeyCode::Delete => {
                Some(Action::RequestDelete(Collection::Products, id))
            }
            _ => None,
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ListingUpdated(listing) = action {
            if let CollectionListing::Products(listing) = listing.as_ref() {
                self.listing = listing.clone();
                self.cursor.clamp(self.listing.len());
            }
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Products ({}) ", self.listing.len());
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

        let layout = Layout::vertical([
            Constraint::Min(1),    // table
            Constraint::Length(1), // hints
        ])
        .split(inner);

        if self.listing.is_empty() {
            self.render_placeholder(frame, layout[0]);
        } else {
            let header = Row::new(vec![
                Cell::from("Name").style(theme::table_header()),
                Cell::from("Category").style(theme::table_header()),
                Cell::from("Price").style(theme::table_header()),
                Cell::from("Qty").style(theme::table_header()),
            ]);

            let selected_idx = self.cursor.index();
            let rows: Vec<Row> = self
                .listing
                .items()
                .iter()
                .enumerate()
                .map(|(i, product)| {
                    let prefix = if i == selected_idx { "▸" } else { " " };
                    let qty_style = if product.quantity == 0 {
                        Style::default().fg(theme::POMEGRANATE)
                    } else {
                        Style::default().fg(theme::LEAF_GREEN)
                    };
                    Row::new(vec![
                        Cell::from(format!("{prefix}{}", product.name)),
                        Cell::from(product.category.as_str()),
                        Cell::from(product.price_display.as_str()).style(theme::amount()),
                        Cell::from(product.quantity.to_string()).style(qty_style),
                    ])
                    .style(theme::table_row())
                })
                .collect();

            let widths = [
                Constraint::Min(18),
                Constraint::Length(14),
                Constraint::Length(18),
                Constraint::Length(6),
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
        "Products"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crossterm::event::KeyModifiers;
    use ombor_core::{DataStore, EntityId, ViewController};

    fn loaded() -> ProductsScreen {
        let store = DataStore::with_demo_data();
        let render = ViewController::default().render(&store, Collection::Products);
        let mut screen = ProductsScreen::new();
        let follow_up = screen.update(&Action::ListingUpdated(Arc::new(render.listing)));
        assert!(matches!(follow_up, Ok(None)));
        screen
    }

    fn press(screen: &mut ProductsScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .ok()
            .flatten()
    }

    #[test]
    fn keys_target_the_selected_row() {
        let mut screen = loaded();
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Down);
        assert!(matches!(
            press(&mut screen, KeyCode::Char('e')),
            Some(Action::OpenEdit(Collection::Products, id)) if id == EntityId::from(3)
        ));
        assert!(matches!(
            press(&mut screen, KeyCode::Char('d')),
            Some(Action::RequestDelete(Collection::Products, id)) if id == EntityId::from(3)
        ));
    }

    #[test]
    fn empty_listing_only_offers_create() {
        let mut screen = ProductsScreen::new();
        assert!(press(&mut screen, KeyCode::Enter).is_none());
        assert!(matches!(
            press(&mut screen, KeyCode::Char('n')),
            Some(Action::OpenCreate(Collection::Products))
        ));
    }

    #[test]
    fn employee_listings_are_ignored() {
        let mut screen = loaded();
        let store = DataStore::new();
        let render = ViewController::default().render(&store, Collection::Employees);
        let _ = screen.update(&Action::ListingUpdated(Arc::new(render.listing)));
        assert_eq!(screen.listing.len(), 4);
    }
}
