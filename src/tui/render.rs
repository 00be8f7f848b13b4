//! TUI Rendering
//!
//! Main rendering logic for the terminal interface.

use super::app::{App, Tab, WebsiteField, WhatsAppField};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Main color palette
const BRAND_GREEN: Color = Color::Rgb(16, 185, 129);
const BRAND_PURPLE: Color = Color::Rgb(147, 51, 234);
const ACCENT_GOLD: Color = Color::Rgb(184, 134, 11);

fn accent(tab: Tab) -> Color {
    match tab {
        Tab::WhatsApp => BRAND_GREEN,
        Tab::Website => BRAND_PURPLE,
    }
}

/// Render the entire UI
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Length(9), // Form
            Constraint::Min(6),    // Preview
            Constraint::Length(3), // Action bar
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_tab_bar(f, app, chunks[1]);
    match app.tab {
        Tab::WhatsApp => render_whatsapp_form(f, app, chunks[2]),
        Tab::Website => render_website_form(f, app, chunks[2]),
    }
    render_preview(f, app, chunks[3]);
    render_action_bar(f, app, chunks[4]);
    render_footer(f, app, chunks[5]);

    if app.picker.is_some() {
        render_contact_picker(f, app);
    }
}

/// Render the header
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header_line = Line::from(vec![
        Span::styled(" 🧹 ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "Compose a request to get your personal data deleted",
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(vec![header_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " forgetme — Data Deletion Assistant ",
                Style::default()
                    .fg(accent(app.tab))
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(accent(app.tab))),
    );

    f.render_widget(header, area);
}

/// Render the two tabs
fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for tab in [Tab::WhatsApp, Tab::Website] {
        let active = tab == app.tab;
        let style = if active {
            Style::default()
                .fg(accent(tab))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!(
                " {} {} ",
                if active { "▸" } else { " " },
                tab.title()
            ),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One labeled input line with a trailing cursor on the focused field.
fn field_line(
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    accent: Color,
    max_width: usize,
) -> Line<'static> {
    let (display, dim_value) = if value.is_empty() {
        (placeholder.to_string(), true)
    } else {
        (value.to_string(), false)
    };

    // Keep the tail visible when the value outgrows the row
    let mut shown = display;
    while shown.width() > max_width.saturating_sub(label.width() + 4) && !shown.is_empty() {
        shown.remove(0);
    }
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(
            format!("  {label} "),
            Style::default().fg(if focused { accent } else { Color::DarkGray }),
        ),
        Span::styled(
            format!("{shown}{cursor}"),
            Style::default().fg(if dim_value {
                Color::DarkGray
            } else if focused {
                Color::White
            } else {
                Color::Gray
            }),
        ),
    ])
}

/// Render the WhatsApp builder form
fn render_whatsapp_form(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    lines.push(field_line(
        "Contact's phone number (with country code):",
        &app.whatsapp.phone_number,
        "e.g., 14155552671",
        app.whatsapp_field == WhatsAppField::PhoneNumber,
        BRAND_GREEN,
        width,
    ));
    if app.contact_picker_available() {
        lines.push(Line::from(Span::styled(
            "      [Ctrl+P] pick from contacts",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::from(""));
    lines.push(field_line(
        "Contact's name (optional):             ",
        &app.whatsapp.contact_name,
        "e.g., Alex",
        app.whatsapp_field == WhatsAppField::ContactName,
        BRAND_GREEN,
        width,
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ask a contact to delete your number ")
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the website builder form
fn render_website_form(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line<'static>> = vec![
        Line::from(""),
        field_line(
            "Website / company name:   ",
            &app.website.website_name,
            "e.g., Example Corp",
            app.website_field == WebsiteField::WebsiteName,
            BRAND_PURPLE,
            width,
        ),
        Line::from(""),
        field_line(
            "Your identifying details: ",
            &app.website.user_details,
            "e.g., Email: user@example.com, Username: myuser",
            app.website_field == WebsiteField::UserDetails,
            BRAND_PURPLE,
            width,
        ),
        Line::from(""),
        field_line(
            "Website's contact email:  ",
            &app.website.website_email,
            "e.g., privacy@example.com",
            app.website_field == WebsiteField::WebsiteEmail,
            BRAND_PURPLE,
            width,
        ),
        Line::from(Span::styled(
            "      usually found in the website's privacy policy",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Request data deletion from a website ")
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the generated message/email preview
fn render_preview(f: &mut Frame, app: &App, area: Rect) {
    let (title, text) = match app.tab {
        Tab::WhatsApp => (" Generated message ", app.whatsapp.message()),
        Tab::Website => (" Generated email ", app.website.email_body()),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(paragraph, area);
}

/// Render the action bar, with the static gating hint while disabled
fn render_action_bar(f: &mut Frame, app: &App, area: Rect) {
    let (link, open_label) = match app.tab {
        Tab::WhatsApp => (app.whatsapp.link(), "Open in WhatsApp"),
        Tab::Website => (app.website.link(), "Open in email client"),
    };

    let mut spans: Vec<Span> = vec![
        Span::styled(
            " [Ctrl+O] ",
            Style::default()
                .fg(if link.enabled { accent(app.tab) } else { Color::DarkGray })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            open_label,
            Style::default().fg(if link.enabled { Color::White } else { Color::DarkGray }),
        ),
    ];

    if app.tab == Tab::Website {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "[Ctrl+Y] ",
            Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            if app.copy_ack_active() {
                "Copied!"
            } else {
                "Copy email text"
            },
            Style::default().fg(if app.copy_ack_active() {
                BRAND_GREEN
            } else {
                Color::White
            }),
        ));
    }

    let hint = if link.enabled {
        None
    } else {
        Some(match app.tab {
            Tab::WhatsApp => "Please enter a phone number to generate the link.",
            Tab::Website => "Please fill all fields to enable the action buttons.",
        })
    };

    let mut lines = vec![Line::from(spans)];
    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the key help footer and transient status
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(status) => Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(ACCENT_GOLD),
        )),
        None => Line::from(Span::styled(
            " ←/→ switch tab   Tab/↑/↓ move   Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Render the contact picker overlay
fn render_contact_picker(f: &mut Frame, app: &App) {
    let Some(book) = app.contact_book.as_ref() else {
        return;
    };
    let Some(picker) = app.picker.as_ref() else {
        return;
    };

    let area = f.area();
    let height = (book.len() as u16 + 4).min(area.height.saturating_sub(4)).max(5);
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(50.min(area.width.saturating_sub(2))),
            Constraint::Min(0),
        ])
        .split(v_chunks[1]);
    let popup = h_chunks[1];

    let items: Vec<ListItem> = book
        .contacts()
        .iter()
        .map(|contact| ListItem::new(contact.label()))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" > ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Select a contact (Enter picks, Esc cancels) ",
                    Style::default().fg(BRAND_GREEN),
                ))
                .border_style(Style::default().fg(BRAND_GREEN)),
        );

    let mut state = ListState::default();
    state.select(Some(picker.selected));

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut state);
}
