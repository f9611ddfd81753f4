use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let selected = app.selected_label().map(|l| l.id.as_str()).unwrap_or("-");
            format!(
                " speed {} | {} | theme {}{}",
                app.scroll_speed,
                selected,
                app.theme_name,
                if app.dimmed { " | dimmed" } else { "" }
            )
        };

        let help_hint = " q:quit +/-:speed s:scroll f:fade a:add r:reset d:dim t:theme ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.text).bg(theme.surface)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.surface)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.surface)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
