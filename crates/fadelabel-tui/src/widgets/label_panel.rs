use std::time::Duration;

use fadelabel_core::LabelPhase;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::host::{CellMetrics, TerminalHost};

pub struct LabelPanelWidget;

impl LabelPanelWidget {
    /// Advance every label by `elapsed` and draw it in its own bordered box
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, elapsed: Duration) {
        let metrics = CellMetrics::new(app.config.ui.cell_px);
        let screen = metrics.to_px(frame.area());

        let constraints: Vec<Constraint> = app
            .labels
            .iter()
            .map(|l| Constraint::Length(l.height + 2))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let rows = Layout::vertical(constraints).split(area);

        for idx in 0..app.labels.len() {
            let row = rows[idx];
            let is_selected = idx == app.selected;

            let border_style = if is_selected {
                Style::default().fg(app.theme.selected)
            } else {
                Style::default().fg(app.theme.border)
            };

            let demo = &app.labels[idx];
            let (phase, phase_color) = match demo.last {
                Some(r) => (phase_name(r.phase), app.theme.phase_color(r.phase)),
                None => ("-", app.theme.muted),
            };
            let title = Line::from(vec![
                Span::styled(
                    format!(" {} ", demo.id),
                    if is_selected {
                        Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(app.theme.muted)
                    },
                ),
                Span::styled(format!("{} ", phase), Style::default().fg(phase_color)),
            ]);

            let block = Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(app.theme.background));
            let inner = block.inner(row);
            frame.render_widget(block, row);

            let ctx = app.frame_context(elapsed, metrics.to_px(inner), screen);
            let background = app.theme.background;
            let demo = &mut app.labels[idx];
            let mut host =
                TerminalHost::new(frame.buffer_mut(), metrics, background, &app.properties);
            demo.last = Some(demo.label.render(&ctx, &mut host));
        }
    }
}

/// Short name shown in the box title
pub fn phase_name(phase: LabelPhase) -> &'static str {
    match phase {
        LabelPhase::Hidden => "hidden",
        LabelPhase::Idle => "idle",
        LabelPhase::Static => "static",
        LabelPhase::FadeIn => "fade-in",
        LabelPhase::SteadyStatic => "waiting",
        LabelPhase::SteadyScrolling => "scrolling",
        LabelPhase::Clipped => "clipped",
    }
}

#[cfg(test)]
mod tests {
    use fadelabel_core::{AppConfig, LabelConfig};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_draws_label_inside_its_box() {
        let config = AppConfig {
            labels: vec![LabelConfig {
                id: "one".to_string(),
                text: "Hello".to_string(),
                allow_fade_in: false,
                ..Default::default()
            }],
            ..Default::default()
        };
        let mut app = App::new(config);
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                LabelPanelWidget::render(f, area, &mut app, Duration::from_millis(33));
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let row: String = (1..6u16).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "Hello");
        assert_eq!(app.labels[0].last.map(|r| r.phase), Some(LabelPhase::Static));
    }
}
