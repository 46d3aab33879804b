use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pagereel_core::config::KeymapConfig;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = if app.drag.is_active() {
            "DRAG"
        } else {
            match app.mode {
                Mode::Normal => "NORMAL",
                Mode::Help => "HELP",
            }
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | Page {}/{} | x={:.0}",
                mode_str,
                app.current_page() + 1,
                app.page_count(),
                app.current_offset(),
            )
        };

        let help_hint = key_hints(&app.config.keymap);
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey1).bg(app.theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}

/// Key hints reflecting the active keymap, not the defaults
fn key_hints(keymap: &KeymapConfig) -> String {
    format!(
        " {}:quit {}/{}:page {}/{}:flick {}:help ",
        keymap.quit,
        keymap.prev_page,
        keymap.next_page,
        keymap.flick_backward,
        keymap.flick_forward,
        keymap.help,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_hints_follow_default_keymap() {
        let hints = key_hints(&KeymapConfig::default());
        assert_eq!(hints, " q:quit h/l:page H/L:flick ?:help ");
    }

    #[test]
    fn test_key_hints_follow_reconfigured_keymap() {
        let keymap = KeymapConfig {
            quit: "x".to_string(),
            next_page: "<Right>".to_string(),
            prev_page: "<Left>".to_string(),
            ..Default::default()
        };
        let hints = key_hints(&keymap);
        assert!(hints.contains("x:quit"), "hints={}", hints);
        assert!(hints.contains("<Left>/<Right>:page"), "hints={}", hints);
    }
}
