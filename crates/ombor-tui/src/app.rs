//! Application core: owns the stores, the view controller and the event loop.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use ombor_core::{
    Collection, CoreError, DataStore, DetailView, Entity, EntityId, FormFields, Render,
    ViewController,
};

use crate::action::{Action, Notification, NotificationLevel, PendingDelete};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::detail::render_detail;
use crate::widgets::form::FormOverlay;

const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Event-loop timing.
#[derive(Debug, Clone, Copy)]
pub struct Rates {
    pub tick: Duration,
    pub render: Duration,
}

/// Top-level application state and event loop.
pub struct App {
    active_screen: ScreenId,
    previous_screen: Option<ScreenId>,
    screens: HashMap<ScreenId, Box<dyn Component>>,
    running: bool,
    help_visible: bool,
    search_active: bool,
    search_query: String,
    terminal_size: (u16, u16),
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    store: DataStore,
    controller: ViewController,
    rates: Rates,
    /// Create/edit overlay (captures input while open).
    form: Option<FormOverlay>,
    /// Detail overlay and the record it shows.
    detail: Option<(Collection, EntityId, DetailView)>,
    /// Delete awaiting confirmation (captures input while open).
    pending_delete: Option<PendingDelete>,
    notification: Option<(Notification, Instant)>,
}

impl App {
    pub fn new(store: DataStore, controller: ViewController, rates: Rates) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens().into_iter().collect();

        Self {
            active_screen: ScreenId::Dashboard,
            previous_screen: None,
            screens,
            running: true,
            help_visible: false,
            search_active: false,
            search_query: String::new(),
            terminal_size: (0, 0),
            action_tx,
            action_rx,
            store,
            controller,
            rates,
            form: None,
            detail: None,
            pending_delete: None,
            notification: None,
        }
    }

    /// Focus the initial screen and hand every screen its first listing.
    fn init_screens(&mut self) -> Result<()> {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        for collection in [Collection::Products, Collection::Employees] {
            self.publish(self.controller.render(&self.store, collection))?;
        }
        Ok(())
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.terminal_size = tui.size().unwrap_or((80, 24));
        self.init_screens()?;

        let mut events = EventReader::new(self.rates.tick, self.rates.render);

        info!(
            products = self.store.products().len(),
            employees = self.store.employees().len(),
            "TUI event loop started"
        );

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Overlays capture input first; global
    /// keys come next; everything else goes to the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.pending_delete.is_some() {
            return Ok(match key.code {
                KeyCode::Char('y' | 'Y') => Some(Action::ConfirmYes),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmNo),
                _ => None,
            });
        }

        if let Some(form) = self.form.as_mut() {
            return Ok(form.handle_key(key));
        }

        if let Some((collection, id, _)) = &self.detail {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('q' | 'v') | KeyCode::Enter => {
                    Some(Action::CloseDetail)
                }
                KeyCode::Char('e') => Some(Action::OpenEdit(*collection, *id)),
                _ => None,
            });
        }

        if self.search_active {
            return Ok(match key.code {
                KeyCode::Esc => Some(Action::CloseSearch),
                KeyCode::Enter => Some(Action::SearchSubmit),
                KeyCode::Backspace => {
                    self.search_query.pop();
                    Some(Action::SearchInput(self.search_query.clone()))
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    Some(Action::SearchInput(self.search_query.clone()))
                }
                _ => None,
            });
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char('/')) => return Ok(Some(Action::OpenSearch)),

            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='3')) => {
                let n = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                if let Some(screen) = n.and_then(ScreenId::from_number) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action: update app state and propagate to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,

            Action::Resize(w, h) => self.terminal_size = (*w, *h),

            Action::SwitchScreen(target) => self.switch_screen(*target),

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    self.action_tx.send(Action::SwitchScreen(prev))?;
                }
            }

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::Render => {}

            Action::Tick => {
                if let Some((_, created)) = &self.notification {
                    if created.elapsed() > NOTIFICATION_TTL {
                        self.notification = None;
                    }
                }
            }

            Action::Notify(notification) => {
                self.notification = Some((notification.clone(), Instant::now()));
            }

            // Data updates go to every screen so inactive tabs stay current.
            Action::ListingUpdated(_) | Action::SummaryUpdated(_) => {
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            // ── Search ────────────────────────────────────────────────
            Action::OpenSearch => {
                if let Some(collection) = self.active_screen.collection() {
                    self.search_active = true;
                    self.search_query = self.controller.search(collection).to_owned();
                }
            }

            Action::SearchInput(query) => {
                if let Some(collection) = self.active_screen.collection() {
                    let render = self.controller.set_search(&self.store, collection, query.as_str());
                    self.publish(render)?;
                }
            }

            Action::CloseSearch => {
                self.search_active = false;
                self.search_query.clear();
                if let Some(collection) = self.active_screen.collection() {
                    let render = self.controller.set_search(&self.store, collection, "");
                    self.publish(render)?;
                }
            }

            Action::SearchSubmit => self.search_active = false,

            // ── Forms ─────────────────────────────────────────────────
            Action::OpenCreate(collection) => {
                let fields = self.controller.begin_create(*collection);
                self.open_form(*collection, fields);
            }

            Action::OpenEdit(collection, id) => {
                match self.controller.begin_edit(&self.store, *collection, *id) {
                    Ok(fields) => self.open_form(*collection, fields),
                    Err(e) => self.notify(Notification::error(e.to_string()))?,
                }
            }

            Action::SubmitForm(fields) => self.submit_form(fields.clone())?,

            Action::CancelForm => {
                if let Some(form) = self.form.take() {
                    self.controller.cancel(form.collection());
                }
            }

            // ── Detail ────────────────────────────────────────────────
            Action::OpenDetail(collection, id) => {
                match self.controller.view(&self.store, *collection, *id) {
                    Ok(detail) => self.detail = Some((*collection, *id, detail)),
                    Err(e) => self.notify(Notification::error(e.to_string()))?,
                }
            }

            Action::CloseDetail => self.detail = None,

            // ── Delete ────────────────────────────────────────────────
            Action::RequestDelete(collection, id) => {
                let name = match collection {
                    Collection::Products => {
                        self.store.products().find_by_id(*id).map(Entity::name)
                    }
                    Collection::Employees => {
                        self.store.employees().find_by_id(*id).map(Entity::name)
                    }
                };
                match name {
                    Some(name) => {
                        self.pending_delete = Some(PendingDelete {
                            collection: *collection,
                            id: *id,
                            name: name.to_owned(),
                        });
                    }
                    None => {
                        let err = CoreError::NotFound {
                            collection: *collection,
                            id: *id,
                        };
                        self.notify(Notification::error(err.to_string()))?;
                    }
                }
            }

            Action::ConfirmYes => self.resolve_delete(true)?,
            Action::ConfirmNo => self.resolve_delete(false)?,
        }
        Ok(())
    }

    fn switch_screen(&mut self, target: ScreenId) {
        if target == self.active_screen {
            return;
        }
        debug!("switching screen: {} → {}", self.active_screen, target);
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(false);
        }
        self.previous_screen = Some(self.active_screen);
        self.active_screen = target;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
            debug!(component = screen.id(), "focused");
        }
    }

    /// Broadcast a fresh listing and summary to every screen.
    fn publish(&self, render: Render) -> Result<()> {
        self.action_tx.send(Action::SummaryUpdated(render.summary))?;
        self.action_tx
            .send(Action::ListingUpdated(Arc::new(render.listing)))?;
        Ok(())
    }

    fn notify(&self, notification: Notification) -> Result<()> {
        self.action_tx.send(Action::Notify(notification))?;
        Ok(())
    }

    fn open_form(&mut self, collection: Collection, fields: FormFields) {
        self.detail = None;
        self.switch_screen(ScreenId::for_collection(collection));
        self.form = Some(FormOverlay::new(self.controller.form_title(collection), fields));
    }

    fn submit_form(&mut self, fields: FormFields) -> Result<()> {
        let collection = fields.collection();
        let verb = if self.controller.editing(collection).is_some() {
            "updated"
        } else {
            "added"
        };

        match self.controller.submit(&mut self.store, fields) {
            Ok(render) => {
                self.form = None;
                self.publish(render)?;
                self.notify(Notification::success(format!(
                    "{} {verb}",
                    collection.entity_label()
                )))?;
            }
            Err(e @ CoreError::ValidationFailed { field, .. }) => {
                if let Some(form) = self.form.as_mut() {
                    form.reject(Some(field), e.to_string());
                }
            }
            Err(e) => {
                // The record vanished while the form was open.
                warn!(%collection, error = %e, "closing form");
                self.form = None;
                self.controller.cancel(collection);
                self.notify(Notification::error(e.to_string()))?;
            }
        }
        Ok(())
    }

    /// Answer the pending delete through the controller's confirmation gate.
    fn resolve_delete(&mut self, answer: bool) -> Result<()> {
        let Some(pending) = self.pending_delete.take() else {
            return Ok(());
        };
        let mut decide = |_: &str| answer;

        match self.controller.request_delete(
            &mut self.store,
            pending.collection,
            pending.id,
            &mut decide,
        ) {
            Ok(Some(render)) => {
                if matches!(&self.detail, Some((c, id, _)) if *c == pending.collection && *id == pending.id)
                {
                    self.detail = None;
                }
                self.publish(render)?;
                self.notify(Notification::success(format!("Deleted {}", pending.name)))?;
            }
            Ok(None) => self.notify(Notification::info(format!("Kept {}", pending.name)))?,
            Err(e) => self.notify(Notification::error(e.to_string()))?,
        }
        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Min(1),    // screen content
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }
        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays, last drawn is topmost.
        if let Some((_, _, detail)) = &self.detail {
            render_detail(frame, layout[0], detail);
        }
        if let Some(form) = &self.form {
            form.render(frame, layout[0]);
        }
        if let Some((notification, _)) = &self.notification {
            Self::render_notification(frame, area, notification);
        }
        if let Some(pending) = &self.pending_delete {
            Self::render_confirm_dialog(frame, area, pending);
        }
        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(format!(" {} {} ", id.number(), id.label()), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.search_active {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::SAFFRON)),
                Span::styled(&self.search_query, Style::default().fg(theme::TEAL)),
                Span::styled("█", Style::default().fg(theme::TEAL)),
                Span::styled("  Esc clear  Enter keep", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        if let Some(collection) = self.active_screen.collection() {
            let query = self.controller.search(collection);
            if !query.is_empty() {
                spans.push(Span::styled(
                    format!("filter \"{query}\" "),
                    Style::default().fg(theme::SAFFRON),
                ));
            }
        }
        spans.push(Span::styled(
            format!("prices in {} ", display_currency(self.controller.currency())),
            theme::key_hint(),
        ));
        if self.terminal_size.0 >= 60 {
            spans.push(Span::styled(
                "│ ? help  / search  n new  q quit",
                theme::key_hint(),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 56u16.min(area.width.saturating_sub(4));
        let help_height = 20u16.min(area.height.saturating_sub(4));
        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(Clear, help_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));

        let heading = |text: &'static str| {
            Line::from(Span::styled(text, Style::default().fg(theme::TEAL)))
        };
        let entry = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(key, theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            heading("  Navigation"),
            entry("  1-3       ", "Jump to screen"),
            entry("  Tab       ", "Next screen"),
            entry("  j/k ↑/↓   ", "Move up/down"),
            entry("  g/G       ", "Top / bottom"),
            entry("  Esc       ", "Back / close"),
            Line::from(""),
            heading("  Records"),
            entry("  n         ", "New record"),
            entry("  e         ", "Edit selected"),
            entry("  d         ", "Delete selected"),
            entry("  Enter     ", "View details"),
            entry("  /         ", "Search"),
            Line::from(""),
            heading("  Global"),
            entry("  ?         ", "This help"),
            entry("  q         ", "Quit"),
        ];

        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    fn render_confirm_dialog(frame: &mut Frame, area: Rect, pending: &PendingDelete) {
        let width = 54u16.min(area.width.saturating_sub(4));
        let height = 5u16;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(area.x + x, area.y + y, width, height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Confirm ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::POMEGRANATE))
            .style(Style::default().bg(theme::BG_DARK));

        let text = vec![
            Line::from(Span::styled(
                format!("  {pending}"),
                Style::default().fg(theme::TEXT),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  y ", theme::key_hint_key()),
                Span::styled("delete    ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("keep", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(text).block(block), dialog_area);
    }

    /// Toast in the bottom-right corner, above the status bar.
    fn render_notification(frame: &mut Frame, area: Rect, notif: &Notification) {
        let msg_len = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
        let width = msg_len.saturating_add(6).clamp(20, 60);
        let height = 3u16;
        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2);
        let toast_area = Rect::new(area.x + x, area.y + y, width.min(area.width), height);

        let (border_color, icon) = match notif.level {
            NotificationLevel::Success => (theme::LEAF_GREEN, "✓"),
            NotificationLevel::Error => (theme::POMEGRANATE, "✗"),
            NotificationLevel::Info => (theme::TEAL, "·"),
        };

        frame.render_widget(Clear, toast_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme::BG_DARK));

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
            Span::styled(notif.message.as_str(), Style::default().fg(theme::TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), toast_area);
    }
}

fn display_currency(currency: &str) -> &str {
    if currency.is_empty() { "plain numbers" } else { currency }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ombor_core::{ProductForm, format_amount};
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let rates = Rates {
            tick: Duration::from_millis(250),
            render: Duration::from_millis(33),
        };
        let mut app = App::new(DataStore::with_demo_data(), ViewController::default(), rates);
        app.init_screens().unwrap();
        drain(&mut app);
        app
    }

    /// Process queued actions until the channel is empty.
    fn drain(app: &mut App) {
        while let Ok(action) = app.action_rx.try_recv() {
            app.process_action(&action).unwrap();
        }
    }

    fn dispatch(app: &mut App, action: Action) {
        app.process_action(&action).unwrap();
        drain(app);
    }

    fn key(app: &mut App, code: KeyCode) {
        let action = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        if let Some(action) = action {
            dispatch(app, action);
        }
    }

    fn notification(app: &App) -> Option<&str> {
        app.notification.as_ref().map(|(n, _)| n.message.as_str())
    }

    #[test]
    fn creating_a_product_updates_store_and_notifies() {
        let mut app = app();
        dispatch(&mut app, Action::OpenCreate(Collection::Products));
        assert_eq!(app.active_screen, ScreenId::Products);
        assert!(app.form.is_some());

        let fields = FormFields::Product(ProductForm {
            name: "Stul".into(),
            price: "120000".into(),
            quantity: "3".into(),
            ..ProductForm::default()
        });
        dispatch(&mut app, Action::SubmitForm(fields));

        assert!(app.form.is_none());
        assert_eq!(app.store.products().len(), 5);
        assert_eq!(notification(&app), Some("Product added"));
    }

    #[test]
    fn invalid_submission_keeps_form_open() {
        let mut app = app();
        dispatch(&mut app, Action::OpenEdit(Collection::Products, EntityId::from(1)));
        dispatch(
            &mut app,
            Action::SubmitForm(FormFields::Product(ProductForm::default())),
        );

        assert!(app.form.is_some());
        assert_eq!(app.controller.editing(Collection::Products), Some(EntityId::from(1)));
        assert_eq!(app.store.products().find_by_id(EntityId::from(1)).unwrap().name, "Noutbuk HP");
    }

    #[test]
    fn escape_in_form_cancels_edit_mode() {
        let mut app = app();
        dispatch(&mut app, Action::OpenEdit(Collection::Employees, EntityId::from(2)));
        key(&mut app, KeyCode::Esc);
        assert!(app.form.is_none());
        assert_eq!(app.controller.editing(Collection::Employees), None);
    }

    #[test]
    fn delete_waits_for_confirmation() {
        let mut app = app();
        dispatch(&mut app, Action::RequestDelete(Collection::Employees, EntityId::from(4)));
        assert_eq!(
            app.pending_delete.as_ref().map(ToString::to_string).as_deref(),
            Some("Delete this employee? (Jasur Toshmatov)")
        );

        key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.employees().len(), 4);

        dispatch(&mut app, Action::RequestDelete(Collection::Employees, EntityId::from(4)));
        key(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.employees().len(), 3);
        assert_eq!(notification(&app), Some("Deleted Jasur Toshmatov"));
    }

    #[test]
    fn search_filters_the_active_collection() {
        let mut app = app();
        dispatch(&mut app, Action::SwitchScreen(ScreenId::Products));
        key(&mut app, KeyCode::Char('/'));
        assert!(app.search_active);
        for ch in "mebel".chars() {
            key(&mut app, KeyCode::Char(ch));
        }
        key(&mut app, KeyCode::Enter);

        assert!(!app.search_active);
        assert_eq!(app.controller.search(Collection::Products), "mebel");
        assert_eq!(app.controller.search(Collection::Employees), "");

        key(&mut app, KeyCode::Char('/'));
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.controller.search(Collection::Products), "");
    }

    #[test]
    fn search_is_unavailable_on_dashboard() {
        let mut app = app();
        key(&mut app, KeyCode::Char('/'));
        assert!(!app.search_active);
    }

    #[test]
    fn detail_overlay_opens_and_edits() {
        let mut app = app();
        dispatch(&mut app, Action::OpenDetail(Collection::Products, EntityId::from(1)));
        let (_, _, detail) = app.detail.as_ref().unwrap();
        assert_eq!(detail.title, "Noutbuk HP");
        assert!(detail.sections[0].rows.iter().any(|r| r.value == format!("{} so'm", format_amount(5_500_000))));

        key(&mut app, KeyCode::Char('e'));
        assert!(app.detail.is_none());
        assert!(app.form.is_some());
    }

    #[test]
    fn missing_record_reports_not_found() {
        let mut app = app();
        dispatch(&mut app, Action::OpenDetail(Collection::Employees, EntityId::from(42)));
        assert!(app.detail.is_none());
        assert_eq!(notification(&app), Some("Employee not found: 42"));
    }

    #[test]
    fn number_keys_switch_screens() {
        let mut app = app();
        key(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_screen, ScreenId::Employees);
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.active_screen, ScreenId::Dashboard);
    }
}
