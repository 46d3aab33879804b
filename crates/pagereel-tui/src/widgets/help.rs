use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let keymap = &app.config.keymap;
        let entries = [
            (keymap.prev_page.as_str(), "previous page"),
            (keymap.next_page.as_str(), "next page"),
            (keymap.flick_backward.as_str(), "flick backward (skip pages)"),
            (keymap.flick_forward.as_str(), "flick forward (skip pages)"),
            (keymap.first_page.as_str(), "first page"),
            (keymap.last_page.as_str(), "last page"),
            ("drag", "scroll the deck, settle on release"),
            ("wheel", "nudge the deck, snaps when idle"),
            (keymap.help.as_str(), "toggle this help"),
            (keymap.quit.as_str(), "quit"),
        ];

        let mut lines: Vec<Line> = vec![Line::from("")];
        for (key, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>8}  ", key),
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(description, Style::default().fg(app.theme.fg1)),
            ]));
        }
        lines.push(Line::from(""));

        let popup_area = centered_rect(46, (lines.len() + 2) as u16, area);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(paragraph, popup_area);
    }
}

/// A rect of the given size centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
