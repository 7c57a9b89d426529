//! Create/edit form overlay shared by both record screens.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use ombor_core::{Collection, FormFields, format_amount, parse_amount};

use crate::action::Action;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    /// Digits only, shown grouped in threes.
    Money,
    Count,
    Toggle,
}

impl FieldKind {
    fn accepts(self, ch: char) -> bool {
        match self {
            Self::Text => !ch.is_control(),
            Self::Money | Self::Count => ch.is_ascii_digit(),
            Self::Toggle => false,
        }
    }
}

struct FieldSpec {
    /// Name used in validation errors.
    key: &'static str,
    label: &'static str,
    kind: FieldKind,
}

const fn spec(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, label, kind }
}

const PRODUCT_FIELDS: &[FieldSpec] = &[
    spec("name", "Name", FieldKind::Text),
    spec("price", "Price", FieldKind::Money),
    spec("quantity", "Quantity", FieldKind::Count),
    spec("category", "Category", FieldKind::Text),
    spec("description", "Description", FieldKind::Text),
];

const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    spec("name", "Full name", FieldKind::Text),
    spec("phone", "Phone", FieldKind::Text),
    spec("position", "Position", FieldKind::Text),
    spec("salary", "Salary", FieldKind::Money),
    spec("status", "Status", FieldKind::Toggle),
    spec("email", "Email", FieldKind::Text),
];

/// Form overlay state: the field buffers plus which field has focus.
#[derive(Debug, Clone)]
pub struct FormOverlay {
    title: &'static str,
    fields: FormFields,
    field_idx: usize,
    error: Option<String>,
}

impl FormOverlay {
    pub fn new(title: &'static str, fields: FormFields) -> Self {
        Self {
            title,
            fields,
            field_idx: 0,
            error: None,
        }
    }

    pub fn collection(&self) -> Collection {
        self.fields.collection()
    }

    /// Show a validation message and move focus to the offending field.
    pub fn reject(&mut self, field: Option<&str>, message: impl Into<String>) {
        if let Some(idx) = field.and_then(|f| self.specs().iter().position(|s| s.key == f)) {
            self.field_idx = idx;
        }
        self.error = Some(message.into());
    }

    fn specs(&self) -> &'static [FieldSpec] {
        match self.fields {
            FormFields::Product(_) => PRODUCT_FIELDS,
            FormFields::Employee(_) => EMPLOYEE_FIELDS,
        }
    }

    fn focused_kind(&self) -> FieldKind {
        self.specs()
            .get(self.field_idx)
            .map_or(FieldKind::Toggle, |s| s.kind)
    }

    fn text_mut(&mut self, idx: usize) -> Option<&mut String> {
        match &mut self.fields {
            FormFields::Product(form) => match idx {
                0 => Some(&mut form.name),
                1 => Some(&mut form.price),
                2 => Some(&mut form.quantity),
                3 => Some(&mut form.category),
                4 => Some(&mut form.description),
                _ => None,
            },
            FormFields::Employee(form) => match idx {
                0 => Some(&mut form.name),
                1 => Some(&mut form.phone),
                2 => Some(&mut form.position),
                3 => Some(&mut form.salary),
                5 => Some(&mut form.email),
                _ => None,
            },
        }
    }

    fn field_value(&self, idx: usize) -> String {
        let raw = match &self.fields {
            FormFields::Product(form) => match idx {
                0 => &form.name,
                1 => return masked(&form.price),
                2 => &form.quantity,
                3 => &form.category,
                4 => &form.description,
                _ => return String::new(),
            },
            FormFields::Employee(form) => match idx {
                0 => &form.name,
                1 => &form.phone,
                2 => &form.position,
                3 => return masked(&form.salary),
                4 => return form.status.label().to_owned(),
                5 => &form.email,
                _ => return String::new(),
            },
        };
        raw.clone()
    }

    fn input(&mut self, ch: char) {
        let kind = self.focused_kind();
        if !kind.accepts(ch) {
            return;
        }
        let idx = self.field_idx;
        if let Some(buf) = self.text_mut(idx) {
            buf.push(ch);
            // Refuse digits that would overflow the amount.
            if matches!(kind, FieldKind::Money | FieldKind::Count) && parse_amount(buf).is_none() {
                buf.pop();
            }
        }
        self.error = None;
    }

    fn backspace(&mut self) {
        let idx = self.field_idx;
        if let Some(buf) = self.text_mut(idx) {
            buf.pop();
        }
        self.error = None;
    }

    fn toggle(&mut self) {
        if let FormFields::Employee(form) = &mut self.fields {
            form.status = form.status.toggled();
        }
    }

    /// Apply a key press. Returns the action to dispatch on submit or cancel.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let count = self.specs().len();
        match key.code {
            KeyCode::Esc => return Some(Action::CancelForm),
            KeyCode::Enter => return Some(Action::SubmitForm(self.fields.clone())),
            KeyCode::Tab | KeyCode::Down => self.field_idx = (self.field_idx + 1) % count,
            KeyCode::BackTab | KeyCode::Up => {
                self.field_idx = (self.field_idx + count - 1) % count;
            }
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                if self.focused_kind() == FieldKind::Toggle =>
            {
                self.toggle();
            }
            KeyCode::Char(ch) => self.input(ch),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let specs = self.specs();
        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let overlay_h = (specs.len() as u16 + 7).min(area.height.saturating_sub(2));
        let overlay_w = 56u16.min(area.width.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
        let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
        let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(theme::border_focused());

        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        let label = Style::default().fg(theme::TEXT);
        let focused_label = Style::default()
            .fg(theme::SAFFRON)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from("")];
        for (idx, field) in specs.iter().enumerate() {
            let is_focused = idx == self.field_idx;
            let lbl_style = if is_focused { focused_label } else { label };
            let marker = if is_focused { "▸ " } else { "  " };
            let val_style = match field.kind {
                FieldKind::Money => theme::amount(),
                FieldKind::Toggle if self.field_value(idx) == "Active" => {
                    Style::default().fg(theme::LEAF_GREEN)
                }
                FieldKind::Toggle => Style::default().fg(theme::MUTED),
                _ => Style::default().fg(theme::TEAL),
            };
            let cursor = if is_focused && field.kind != FieldKind::Toggle {
                "▎"
            } else {
                ""
            };

            lines.push(Line::from(vec![
                Span::styled(marker, lbl_style),
                Span::styled(format!("{:<13}", field.label), lbl_style),
                Span::styled(self.field_value(idx), val_style),
                Span::styled(cursor, Style::default().fg(theme::SAFFRON)),
            ]));
        }

        lines.push(Line::from(""));
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(theme::POMEGRANATE),
            )));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(" Tab", theme::key_hint_key()),
            Span::styled(" next  ", theme::key_hint()),
            Span::styled("Space", theme::key_hint_key()),
            Span::styled(" toggle  ", theme::key_hint()),
            Span::styled("Enter", theme::key_hint_key()),
            Span::styled(" save  ", theme::key_hint()),
            Span::styled("Esc", theme::key_hint_key()),
            Span::styled(" cancel", theme::key_hint()),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn masked(raw: &str) -> String {
    parse_amount(raw).map_or_else(|| raw.to_owned(), format_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ombor_core::{EmployeeForm, EmployeeStatus, ProductForm};
    use pretty_assertions::assert_eq;

    fn press(form: &mut FormOverlay, code: KeyCode) -> Option<Action> {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut FormOverlay, text: &str) {
        for ch in text.chars() {
            press(form, KeyCode::Char(ch));
        }
    }

    fn submitted(form: &mut FormOverlay) -> FormFields {
        match press(form, KeyCode::Enter) {
            Some(Action::SubmitForm(fields)) => fields,
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn typing_fills_product_fields_in_order() {
        let mut form = FormOverlay::new("New product", FormFields::empty(Collection::Products));
        type_text(&mut form, "Stol");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "80o0000");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "8");

        assert_eq!(
            submitted(&mut form),
            FormFields::Product(ProductForm {
                name: "Stol".into(),
                price: "800000".into(),
                quantity: "8".into(),
                ..ProductForm::default()
            })
        );
    }

    #[test]
    fn money_field_is_shown_grouped() {
        let mut form = FormOverlay::new("New product", FormFields::empty(Collection::Products));
        press(&mut form, KeyCode::Down);
        type_text(&mut form, "5500000");
        assert_eq!(form.field_value(1), "5 500 000");
    }

    #[test]
    fn money_field_refuses_overflow() {
        let mut form = FormOverlay::new("New product", FormFields::empty(Collection::Products));
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "99999999999999999999999");
        let FormFields::Product(fields) = submitted(&mut form) else {
            panic!("expected product form");
        };
        assert_eq!(fields.price.len(), 19);
    }

    #[test]
    fn status_toggles_instead_of_typing() {
        let mut form = FormOverlay::new("New employee", FormFields::empty(Collection::Employees));
        for _ in 0..4 {
            press(&mut form, KeyCode::Tab);
        }
        type_text(&mut form, "x");
        press(&mut form, KeyCode::Char(' '));

        let FormFields::Employee(EmployeeForm { status, .. }) = submitted(&mut form) else {
            panic!("expected employee form");
        };
        assert_eq!(status, EmployeeStatus::Inactive);
    }

    #[test]
    fn back_tab_wraps_to_last_field() {
        let mut form = FormOverlay::new("New employee", FormFields::empty(Collection::Employees));
        press(&mut form, KeyCode::BackTab);
        type_text(&mut form, "a@b.uz");
        let FormFields::Employee(fields) = submitted(&mut form) else {
            panic!("expected employee form");
        };
        assert_eq!(fields.email, "a@b.uz");
    }

    #[test]
    fn phone_keeps_whatever_was_typed() {
        let mut form = FormOverlay::new("New employee", FormFields::empty(Collection::Employees));
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "+998 90 ext.5");
        let FormFields::Employee(fields) = submitted(&mut form) else {
            panic!("expected employee form");
        };
        assert_eq!(fields.phone, "+998 90 ext.5");
    }

    #[test]
    fn escape_cancels() {
        let mut form = FormOverlay::new("Edit product", FormFields::empty(Collection::Products));
        assert!(matches!(press(&mut form, KeyCode::Esc), Some(Action::CancelForm)));
    }

    #[test]
    fn reject_focuses_the_named_field() {
        let mut form = FormOverlay::new("New employee", FormFields::empty(Collection::Employees));
        form.reject(Some("salary"), "Invalid salary: is required");
        assert_eq!(form.field_idx, 3);
        assert_eq!(form.error.as_deref(), Some("Invalid salary: is required"));

        type_text(&mut form, "1");
        assert_eq!(form.error, None);
    }
}
