use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Renders the horizontally scrolled card deck.
///
/// Card `i` lives at content x `i * page_width`; its screen position is that
/// minus the current offset, so an offset of `page_origin(i)` rests the card
/// against the left inset. Cards partially outside the viewport are clipped.
pub struct DeckWidget;

impl DeckWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let background = Block::default().style(Style::default().bg(app.theme.bg0));
        frame.render_widget(background, area);

        if !app.geometry.is_valid() || app.page_count() == 0 || area.height < 3 {
            return;
        }

        let offset = app.current_offset();
        let page_width = app.geometry.page_width();
        let card_width = app.geometry.item_width.round() as i64;
        let card_height = app.card_height.min(area.height);
        let card_top = area.y + (area.height - card_height) / 2;
        let current = app.current_page();

        for index in 0..app.page_count() {
            let screen_x = (index as f64 * page_width - offset).round() as i64;

            // Clip to the viewport
            let left = screen_x.max(0);
            let right = (screen_x + card_width).min(area.width as i64);
            if right - left < 2 {
                continue;
            }

            let card_area = Rect {
                x: area.x + left as u16,
                y: card_top,
                width: (right - left) as u16,
                height: card_height,
            };

            Self::render_card(frame, card_area, app, index, index == current);
        }

        Self::render_page_dots(frame, area, app, card_top + card_height, current);
    }

    fn render_card(frame: &mut Frame, area: Rect, app: &App, index: usize, is_current: bool) {
        let card = app.deck.card(index);

        let border_style = if is_current {
            Style::default().fg(app.theme.card_color(index))
        } else {
            Style::default().fg(app.theme.grey0)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(app.theme.bg1));

        // Title only when it fits inside the (possibly clipped) card
        let title = format!(" {} ", card.title);
        if (title.width() as u16) + 2 <= area.width {
            block = block.title(title);
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let top_padding = (inner.height.saturating_sub(card.body.len() as u16)) / 2;
        let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
        lines.extend(card.body.iter().map(|text| Line::from(text.as_str())));

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.fg1).bg(app.theme.bg1));
        frame.render_widget(body, inner);
    }

    /// One dot per page under the deck, the current page highlighted
    fn render_page_dots(frame: &mut Frame, area: Rect, app: &App, below: u16, current: usize) {
        let row = below + 1;
        if row >= area.y + area.height {
            return;
        }

        let dots: String = (0..app.page_count())
            .map(|i| if i == current { "●" } else { "·" })
            .collect::<Vec<_>>()
            .join(" ");
        if dots.width() as u16 > area.width {
            return;
        }

        let dots_area = Rect {
            x: area.x,
            y: row,
            width: area.width,
            height: 1,
        };
        let paragraph = Paragraph::new(dots)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.grey1).bg(app.theme.bg0));
        frame.render_widget(paragraph, dots_area);
    }
}
