//! TUI Application State
//!
//! Core state management for the terminal composer. All transitions happen
//! synchronously inside the event handler; the rendered message and the
//! action link are derived from the builder states on every draw.

use super::events::{EventHandler, TuiEvent, keys};
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::contacts::ContactBook;
use crate::request::{WebsiteRequest, WhatsAppRequest};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// How long the "Copied!" acknowledgement stays up after a successful copy.
pub const COPY_ACK_WINDOW: Duration = Duration::from_millis(2000);

/// Which request builder is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    WhatsApp,
    Website,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp Request",
            Self::Website => "Website Request",
        }
    }
}

/// Which field is focused on the WhatsApp tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhatsAppField {
    PhoneNumber,
    ContactName,
}

impl WhatsAppField {
    fn next(self) -> Self {
        match self {
            Self::PhoneNumber => Self::ContactName,
            Self::ContactName => Self::PhoneNumber,
        }
    }

    fn prev(self) -> Self {
        // Two fields, so forward and backward are the same swap
        self.next()
    }
}

/// Which field is focused on the Website tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebsiteField {
    WebsiteName,
    UserDetails,
    WebsiteEmail,
}

impl WebsiteField {
    fn next(self) -> Self {
        match self {
            Self::WebsiteName => Self::UserDetails,
            Self::UserDetails => Self::WebsiteEmail,
            Self::WebsiteEmail => Self::WebsiteName,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::WebsiteName => Self::WebsiteEmail,
            Self::UserDetails => Self::WebsiteName,
            Self::WebsiteEmail => Self::UserDetails,
        }
    }
}

/// Contact picker overlay state
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactPicker {
    pub selected: usize,
}

/// Main application state
pub struct App {
    // Builders
    pub tab: Tab,
    pub whatsapp: WhatsAppRequest,
    pub website: WebsiteRequest,

    // Field focus
    pub whatsapp_field: WhatsAppField,
    pub website_field: WebsiteField,

    // Optional capabilities, probed once at startup
    pub contact_book: Option<ContactBook>,
    clipboard: Option<Clipboard>,

    // Overlay + transient state
    pub picker: Option<ContactPicker>,
    pub status_message: Option<String>,
    copied_at: Option<Instant>,

    pub should_quit: bool,

    // Events
    event_handler: EventHandler,
}

impl App {
    /// Create a new app instance, probing the optional capabilities.
    pub fn new(config: &Config) -> Self {
        let contact_book = ContactBook::detect(config);

        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                None
            }
        };

        Self {
            tab: Tab::WhatsApp,
            whatsapp: WhatsAppRequest::new(),
            website: WebsiteRequest::new(),
            whatsapp_field: WhatsAppField::PhoneNumber,
            website_field: WebsiteField::WebsiteName,
            contact_book,
            clipboard,
            picker: None,
            status_message: None,
            copied_at: None,
            should_quit: false,
            event_handler: EventHandler::new(),
        }
    }

    /// Get event sender
    pub fn event_sender(&self) -> tokio::sync::mpsc::UnboundedSender<TuiEvent> {
        self.event_handler.sender()
    }

    /// Receive next event
    pub async fn next_event(&mut self) -> Option<TuiEvent> {
        self.event_handler.next().await
    }

    /// Whether the contact picker capability is available. The control is
    /// hidden entirely when this is false.
    pub fn contact_picker_available(&self) -> bool {
        self.contact_book.is_some()
    }

    /// Whether the "Copied!" acknowledgement is currently showing.
    pub fn copy_ack_active(&self) -> bool {
        self.copied_at
            .map(|at| at.elapsed() < COPY_ACK_WINDOW)
            .unwrap_or(false)
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key_event) => self.handle_key_event(key_event),
            TuiEvent::Paste(text) => {
                // Paste lands in the focused field, stripped of line breaks
                let text = text.replace(['\r', '\n'], " ");
                self.focused_field_mut().push_str(&text);
            }
            TuiEvent::Tick => self.handle_tick(),
            TuiEvent::Quit => self.should_quit = true,
            TuiEvent::Resize(_, _) | TuiEvent::FocusGained | TuiEvent::FocusLost => {
                // Handled by the render loop
            }
        }
        Ok(())
    }

    /// Expire the copy acknowledgement once its window has elapsed.
    fn handle_tick(&mut self) {
        if let Some(at) = self.copied_at
            && at.elapsed() >= COPY_ACK_WINDOW
        {
            self.copied_at = None;
        }
    }

    /// Handle keyboard input
    fn handle_key_event(&mut self, event: KeyEvent) {
        if self.picker.is_some() {
            self.handle_picker_key(event);
            return;
        }

        if keys::is_quit(&event) {
            self.should_quit = true;
            return;
        }

        if keys::is_open_link(&event) {
            self.open_active_link();
            return;
        }

        if keys::is_copy(&event) {
            self.copy_email_body();
            return;
        }

        if keys::is_pick_contact(&event) {
            self.open_picker();
            return;
        }

        if keys::is_left(&event) || keys::is_right(&event) {
            self.switch_tab();
            return;
        }

        if keys::is_next_field(&event) && event.modifiers.contains(KeyModifiers::SHIFT) {
            self.focus_prev_field();
            return;
        }

        match event.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next_field(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev_field(),
            KeyCode::Char(c)
                if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT =>
            {
                self.status_message = None;
                self.focused_field_mut().push(c);
            }
            KeyCode::Backspace if event.modifiers.is_empty() => {
                self.status_message = None;
                self.focused_field_mut().pop();
            }
            _ => {}
        }
    }

    /// Keys while the contact picker overlay is open
    fn handle_picker_key(&mut self, event: KeyEvent) {
        let Some(book) = self.contact_book.as_ref() else {
            self.picker = None;
            return;
        };
        let count = book.len();
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        if keys::is_cancel(&event) || keys::is_quit(&event) {
            // Cancellation leaves the builder untouched
            self.picker = None;
        } else if keys::is_up(&event) {
            picker.selected = picker.selected.saturating_sub(1);
        } else if keys::is_down(&event) {
            picker.selected = (picker.selected + 1).min(count.saturating_sub(1));
        } else if keys::is_enter(&event) {
            let index = picker.selected;
            self.apply_pick(index);
            self.picker = None;
        }
    }

    fn switch_tab(&mut self) {
        self.status_message = None;
        self.tab = match self.tab {
            Tab::WhatsApp => Tab::Website,
            Tab::Website => Tab::WhatsApp,
        };
    }

    fn focus_next_field(&mut self) {
        match self.tab {
            Tab::WhatsApp => self.whatsapp_field = self.whatsapp_field.next(),
            Tab::Website => self.website_field = self.website_field.next(),
        }
    }

    fn focus_prev_field(&mut self) {
        match self.tab {
            Tab::WhatsApp => self.whatsapp_field = self.whatsapp_field.prev(),
            Tab::Website => self.website_field = self.website_field.prev(),
        }
    }

    /// The string buffer behind the focused field.
    fn focused_field_mut(&mut self) -> &mut String {
        match self.tab {
            Tab::WhatsApp => match self.whatsapp_field {
                WhatsAppField::PhoneNumber => &mut self.whatsapp.phone_number,
                WhatsAppField::ContactName => &mut self.whatsapp.contact_name,
            },
            Tab::Website => match self.website_field {
                WebsiteField::WebsiteName => &mut self.website.website_name,
                WebsiteField::UserDetails => &mut self.website.user_details,
                WebsiteField::WebsiteEmail => &mut self.website.website_email,
            },
        }
    }

    /// Hand the derived deep link to the OS handler, or surface the static
    /// gating hint when required fields are still blank.
    fn open_active_link(&mut self) {
        let link = match self.tab {
            Tab::WhatsApp => self.whatsapp.link(),
            Tab::Website => self.website.link(),
        };

        if !link.enabled {
            self.status_message = Some(
                match self.tab {
                    Tab::WhatsApp => "Please enter a phone number to generate the link.",
                    Tab::Website => "Please fill all fields to enable the action buttons.",
                }
                .to_string(),
            );
            return;
        }

        match open::that(&link.url) {
            Ok(()) => {
                tracing::info!("Opened deep link");
                self.status_message = Some(
                    match self.tab {
                        Tab::WhatsApp => "Opening WhatsApp...",
                        Tab::Website => "Opening email client...",
                    }
                    .to_string(),
                );
            }
            Err(e) => {
                tracing::warn!("Failed to open deep link: {}", e);
                self.status_message = Some("Could not open external handler.".to_string());
            }
        }
    }

    /// Copy the rendered email body to the clipboard (email flow only).
    fn copy_email_body(&mut self) {
        if self.tab != Tab::Website {
            return;
        }
        let body = self.website.email_body();
        match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.copy(&body) {
                Ok(()) => self.acknowledge_copy(),
                Err(e) => tracing::warn!("Clipboard write failed: {}", e),
            },
            None => tracing::warn!("Copy requested but clipboard is unavailable"),
        }
    }

    /// Start (or restart) the copy acknowledgement window.
    fn acknowledge_copy(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// Open the contact picker overlay (WhatsApp flow only, hidden unless
    /// the contact book capability was detected at startup).
    fn open_picker(&mut self) {
        if self.tab != Tab::WhatsApp || !self.contact_picker_available() {
            return;
        }
        self.picker = Some(ContactPicker::default());
    }

    /// Apply a picked contact: first name and digits-only first telephone.
    fn apply_pick(&mut self, index: usize) {
        let Some(book) = self.contact_book.as_ref() else {
            return;
        };
        let Some(picked) = book.pick(index) else {
            tracing::warn!("Contact pick index {} out of range", index);
            return;
        };
        if let Some(name) = picked.name {
            self.whatsapp.contact_name = name;
        }
        if let Some(phone) = picked.phone {
            self.whatsapp.phone_number = phone;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(&Config::default())
    }

    fn app_with_contacts(contacts: &str) -> App {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("contacts.toml");
        std::fs::write(&path, contacts).expect("write contacts");
        let mut app = app();
        app.contact_book = Some(ContactBook::load(&path).expect("load contacts"));
        app
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut app = app();
        for c in "415".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(app.whatsapp.phone_number, "415");

        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.whatsapp.phone_number, "41");
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut app = app();
        assert_eq!(app.whatsapp_field, WhatsAppField::PhoneNumber);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.whatsapp_field, WhatsAppField::ContactName);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.whatsapp_field, WhatsAppField::PhoneNumber);
    }

    #[test]
    fn test_arrows_switch_tab() {
        let mut app = app();
        assert_eq!(app.tab, Tab::WhatsApp);
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.tab, Tab::Website);
        app.handle_key_event(key(KeyCode::Left));
        assert_eq!(app.tab, Tab::WhatsApp);
    }

    #[test]
    fn test_website_fields_cycle_all_three() {
        let mut app = app();
        app.tab = Tab::Website;
        assert_eq!(app.website_field, WebsiteField::WebsiteName);
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.website_field, WebsiteField::UserDetails);
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.website_field, WebsiteField::WebsiteEmail);
        app.handle_key_event(key(KeyCode::Up));
        assert_eq!(app.website_field, WebsiteField::UserDetails);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key_event(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_open_disabled_link_shows_gating_hint() {
        let mut app = app();
        app.handle_key_event(ctrl('o'));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please enter a phone number to generate the link.")
        );
    }

    #[test]
    fn test_copy_ack_window() {
        let mut app = app();
        app.tab = Tab::Website;

        app.acknowledge_copy();
        assert!(app.copy_ack_active());

        // Inside the window a tick leaves the flag up
        app.handle_tick();
        assert!(app.copy_ack_active());

        // Force the deadline into the past: the next tick clears it
        app.copied_at = Some(Instant::now() - COPY_ACK_WINDOW - Duration::from_millis(1));
        assert!(!app.copy_ack_active());
        app.handle_tick();
        assert!(app.copied_at.is_none());
    }

    #[test]
    fn test_recopy_restarts_window() {
        let mut app = app();
        app.copied_at = Some(Instant::now() - Duration::from_millis(1900));
        app.acknowledge_copy();
        // Fresh deadline, still acknowledged well past the original expiry
        assert!(app.copy_ack_active());
    }

    #[test]
    fn test_picker_hidden_without_capability() {
        let mut app = app();
        app.contact_book = None;
        app.handle_key_event(ctrl('p'));
        assert!(app.picker.is_none());
    }

    #[test]
    fn test_picker_only_on_whatsapp_tab() {
        let mut app = app_with_contacts("[[contact]]\nname = [\"Alex\"]\ntel = [\"555\"]\n");
        app.tab = Tab::Website;
        app.handle_key_event(ctrl('p'));
        assert!(app.picker.is_none());
    }

    #[test]
    fn test_picker_cancel_leaves_state_unchanged() {
        let mut app = app_with_contacts(
            "[[contact]]\nname = [\"Alex\"]\ntel = [\"+1 (415) 555-2671\"]\n",
        );
        app.whatsapp.phone_number = "999".to_string();

        app.handle_key_event(ctrl('p'));
        assert!(app.picker.is_some());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.picker.is_none());
        assert_eq!(app.whatsapp.phone_number, "999");
        assert_eq!(app.whatsapp.contact_name, "");
    }

    #[test]
    fn test_picker_selection_fills_fields_sanitized() {
        let mut app = app_with_contacts(
            "[[contact]]\nname = [\"Alex\"]\ntel = [\"+1 (415) 555-2671\"]\n\
             [[contact]]\nname = [\"Bea\"]\ntel = [\"+44 20 7946 0958\"]\n",
        );

        app.handle_key_event(ctrl('p'));
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Enter));

        assert!(app.picker.is_none());
        assert_eq!(app.whatsapp.contact_name, "Bea");
        assert_eq!(app.whatsapp.phone_number, "442079460958");
    }

    #[test]
    fn test_contact_without_name_keeps_typed_name() {
        let mut app = app_with_contacts("[[contact]]\ntel = [\"555-0100\"]\n");
        app.whatsapp.contact_name = "Sam".to_string();

        app.handle_key_event(ctrl('p'));
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.whatsapp.contact_name, "Sam");
        assert_eq!(app.whatsapp.phone_number, "5550100");
    }

    #[test]
    fn test_paste_strips_line_breaks() {
        let mut app = app();
        app.handle_event(TuiEvent::Paste("415\n555".to_string()))
            .expect("paste");
        assert_eq!(app.whatsapp.phone_number, "415 555");
    }
}
