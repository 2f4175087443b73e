use crate::ui::app::App;
use crate::ui::fetch::FetchView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, padded, vertical_center};
use crate::ui::theme::{ACCENT, HEADER_TEXT, LABEL_TEXT, STATUS_ERROR, STATUS_IDLE, VALUE_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.fetch_state().status(), app.resource_label()),
        header,
    );

    frame.render_widget(Clear, body);
    draw_body(frame, app, body);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.can_fetch()), footer);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let inner = padded(body, 1);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match app.view() {
        FetchView::Initial { can_fetch } => {
            let lines = if can_fetch {
                vec![
                    Line::from(Span::styled(
                        "[ Fetch ]",
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press Enter to fetch the post.",
                        Style::default().fg(STATUS_IDLE),
                    )),
                ]
            } else {
                vec![Line::from(Span::styled(
                    "Starting...",
                    Style::default().fg(STATUS_IDLE),
                ))]
            };
            centered_message(frame, inner, lines);
        }
        FetchView::Progress => {
            let line = Line::from(vec![
                Span::styled(app.spinner(), Style::default().fg(ACCENT)),
                Span::styled(" Loading...", Style::default().fg(HEADER_TEXT)),
            ]);
            centered_message(frame, inner, vec![line]);
        }
        view @ (FetchView::Error(_) | FetchView::DataUnavailable) => {
            let line = Line::from(Span::styled(
                view.headline(),
                Style::default().fg(STATUS_ERROR),
            ));
            centered_message(frame, inner, vec![line]);
        }
        view @ FetchView::Fields(_) => {
            let mut lines = Vec::new();
            for (label, value) in view.field_rows() {
                lines.push(Line::from(Span::styled(
                    label,
                    Style::default().fg(LABEL_TEXT).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    value,
                    Style::default().fg(VALUE_TEXT),
                )));
                lines.push(Line::from(""));
            }
            let details = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(details, inner);
        }
    }
}

fn centered_message(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let width = usize::from(area.width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    let strip = vertical_center(area, u16::try_from(rows).unwrap_or(u16::MAX));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, strip);
}
