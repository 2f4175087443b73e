use crate::ui::fetch::FetchStatus;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_IDLE, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, status: FetchStatus, resource: String) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, label, color) = status_badge(status);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "postview",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, Style::default().fg(color)),
            Span::styled(" ", text_style),
            Span::styled(label, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(resource, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_badge(status: FetchStatus) -> (&'static str, &'static str, ratatui::style::Color) {
    match status {
        FetchStatus::Idle => ("○", "Idle", STATUS_IDLE),
        FetchStatus::Loading => ("●", "Loading", STATUS_PENDING),
        FetchStatus::Success => ("●", "Loaded", STATUS_OK),
        FetchStatus::Failure => ("●", "Failed", STATUS_ERROR),
    }
}
