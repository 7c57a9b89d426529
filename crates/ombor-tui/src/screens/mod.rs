//! Screen implementations. Each screen is a top-level Component.

pub mod dashboard;
pub mod employees;
pub mod products;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create screen components in tab-bar order.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Dashboard,
            Box::new(dashboard::DashboardScreen::new()),
        ),
        (ScreenId::Products, Box::new(products::ProductsScreen::new())),
        (
            ScreenId::Employees,
            Box::new(employees::EmployeesScreen::new()),
        ),
    ]
}

/// Row cursor for a record table, clamped to the current row count.
#[derive(Debug, Default)]
pub(crate) struct RowCursor {
    state: TableState,
}

impl RowCursor {
    pub fn index(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn state(&self) -> TableState {
        self.state.clone()
    }

    pub fn select(&mut self, idx: usize, len: usize) {
        if len == 0 {
            self.state.select(None);
        } else {
            self.state.select(Some(idx.min(len - 1)));
        }
    }

    /// Keep the cursor in range after the row count changed.
    pub fn clamp(&mut self, len: usize) {
        self.select(self.index(), len);
    }

    /// Apply a navigation key. Returns `false` if the key is not a
    /// navigation key.
    pub fn navigate(&mut self, key: KeyEvent, len: usize) -> bool {
        let idx = self.index();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select(idx.saturating_add(1), len),
            KeyCode::Char('k') | KeyCode::Up => self.select(idx.saturating_sub(1), len),
            KeyCode::Char('g') | KeyCode::Home => self.select(0, len),
            KeyCode::Char('G') | KeyCode::End => self.select(len.saturating_sub(1), len),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.select(idx.saturating_add(10), len);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.select(idx.saturating_sub(10), len);
            }
            _ => return false,
        }
        true
    }
}
