use std::time::Duration;

use chrono::{DateTime, Local};
use fadelabel_core::label::timing::MAX_SCROLL_SPEED;
use fadelabel_core::{AppConfig, Argb, FadeScrollLabel, FrameContext, LabelMessage, PropertyMap, Rect, RenderedFrame};
use tracing::debug;

use crate::input::Action;
use crate::theme::Theme;
use crate::themes::{load_theme, next_theme_name};

/// Text color mask used while labels are dimmed
pub const DIM_MASK: Argb = Argb(0x60FF_FFFF);

/// Channel and programme names exposed as `#channel` and `#program`
const CHANNEL: &str = "BBC One";
const PROGRAM: &str = "Blade Runner";

/// One label in the demo panel
pub struct DemoLabel {
    pub id: String,
    pub label: FadeScrollLabel,
    /// Height in terminal rows
    pub height: u16,
    /// Outcome of the most recent render
    pub last: Option<RenderedFrame>,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub labels: Vec<DemoLabel>,
    pub properties: PropertyMap,
    /// Current scroll speed, 0-6
    pub scroll_speed: u8,
    pub dimmed: bool,
    pub theme_name: String,
    pub theme: Theme,
    /// Index of the label that receives per-label actions
    pub selected: usize,
    /// Lines appended with the `a` key, used to number the next one
    pub appended: u32,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let labels = config
            .labels
            .iter()
            .map(|cfg| DemoLabel {
                id: cfg.id.clone(),
                label: FadeScrollLabel::with_text(cfg.style(), cfg.text.clone()),
                height: cfg.height.max(1),
                last: None,
            })
            .collect();

        let theme_name = config.ui.theme.clone();
        let mut app = Self {
            scroll_speed: config.ui.scroll_speed.min(MAX_SCROLL_SPEED),
            theme: load_theme(&theme_name),
            theme_name,
            config,
            labels,
            properties: PropertyMap::new(),
            dimmed: false,
            selected: 0,
            appended: 0,
            should_quit: false,
            status_message: None,
        };
        app.update_properties(Local::now());
        app
    }

    /// Called once per frame before drawing
    pub fn tick(&mut self) {
        self.update_properties(Local::now());
    }

    /// Refresh the values `#properties` in label text resolve to
    pub fn update_properties(&mut self, now: DateTime<Local>) {
        self.properties.set("time", now.format("%H:%M:%S").to_string());
        self.properties.set("date", now.format("%a %d %b %Y").to_string());
        self.properties.set("channel", CHANNEL);
        self.properties.set("program", PROGRAM);
    }

    /// Per-frame inputs for a label drawn into `bounds`
    pub fn frame_context(&self, elapsed: Duration, bounds: Rect, screen: Rect) -> FrameContext {
        let mut ctx = FrameContext::new(elapsed, bounds, screen)
            .with_scroll_speed(self.scroll_speed)
            .with_max_fps(self.config.ui.max_fps);
        if self.dimmed {
            ctx.dim = Some(DIM_MASK);
        }
        ctx
    }

    /// True while any label is scrolling or fading
    pub fn needs_refresh(&self) -> bool {
        self.labels
            .iter()
            .any(|l| l.label.needs_refresh() || l.label.is_fading_in())
    }

    pub fn selected_label(&self) -> Option<&DemoLabel> {
        self.labels.get(self.selected)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SpeedUp => {
                self.scroll_speed = (self.scroll_speed + 1).min(MAX_SCROLL_SPEED);
                self.set_status(format!("Scroll speed {}", self.scroll_speed));
            }
            Action::SpeedDown => {
                self.scroll_speed = self.scroll_speed.saturating_sub(1);
                self.set_status(format!("Scroll speed {}", self.scroll_speed));
            }
            Action::ToggleScrolling => {
                if let Some(demo) = self.labels.get_mut(self.selected) {
                    let allow = !demo.label.allow_scrolling();
                    demo.label.set_allow_scrolling(allow);
                    let message = format!("{}: scrolling {}", demo.id, on_off(allow));
                    self.set_status(message);
                }
            }
            Action::ToggleFadeIn => {
                if let Some(demo) = self.labels.get_mut(self.selected) {
                    let allow = !demo.label.allow_fade_in();
                    demo.label.set_allow_fade_in(allow);
                    let message = format!("{}: fade-in {}", demo.id, on_off(allow));
                    self.set_status(message);
                }
            }
            Action::ResetLabels => {
                for demo in &mut self.labels {
                    demo.label.handle_message(LabelMessage::Reset);
                }
                self.set_status("Labels reset");
            }
            Action::ToggleDim => {
                self.dimmed = !self.dimmed;
                self.set_status(format!("Dim {}", on_off(self.dimmed)));
            }
            Action::AppendLine => {
                self.appended += 1;
                let line = format!("Appended line {} at #time", self.appended);
                if let Some(demo) = self.labels.get_mut(self.selected) {
                    demo.label.handle_message(LabelMessage::Add(line));
                    debug!(label = %demo.id, lines = self.appended, "Appended line");
                }
            }
            Action::NextTheme => {
                self.theme_name = next_theme_name(&self.theme_name).to_string();
                self.theme = load_theme(&self.theme_name);
                debug!(theme = %self.theme_name, "Switched theme");
                self.set_status(format!("Theme {}", self.theme_name));
            }
            Action::SelectNext => {
                if !self.labels.is_empty() {
                    self.selected = (self.selected + 1) % self.labels.len();
                }
            }
            Action::SelectPrev => {
                if !self.labels.is_empty() {
                    self.selected = self
                        .selected
                        .checked_sub(1)
                        .unwrap_or(self.labels.len() - 1);
                }
            }
            Action::None => {}
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn test_labels_from_config() {
        let app = app();
        let ids: Vec<_> = app.labels.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["clock", "ticker", "upcoming", "status"]);
        assert_eq!(app.scroll_speed, 4);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut app = app();
        for _ in 0..10 {
            app.apply(Action::SpeedUp);
        }
        assert_eq!(app.scroll_speed, MAX_SCROLL_SPEED);
        for _ in 0..10 {
            app.apply(Action::SpeedDown);
        }
        assert_eq!(app.scroll_speed, 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        app.apply(Action::SelectPrev);
        assert_eq!(app.selected, app.labels.len() - 1);
        app.apply(Action::SelectNext);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_toggle_scrolling_affects_selected_label() {
        let mut app = app();
        app.apply(Action::SelectNext);
        app.apply(Action::ToggleScrolling);
        assert!(app.labels[0].label.allow_scrolling());
        assert!(!app.labels[1].label.allow_scrolling());
        assert_eq!(app.status_message.as_deref(), Some("ticker: scrolling off"));
    }

    #[test]
    fn test_append_line() {
        let mut app = app();
        app.selected = 3;
        app.apply(Action::AppendLine);
        assert_eq!(app.labels[3].label.text(), "Ready\rAppended line 1 at #time");
    }

    #[test]
    fn test_dim_sets_frame_mask() {
        let mut app = app();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(app.frame_context(Duration::ZERO, rect, rect).dim, None);
        app.apply(Action::ToggleDim);
        let ctx = app.frame_context(Duration::ZERO, rect, rect);
        assert_eq!(ctx.dim, Some(DIM_MASK));
        assert_eq!(ctx.max_fps, 30);
    }

    #[test]
    fn test_properties() {
        let mut app = app();
        let now = Local.with_ymd_and_hms(2024, 3, 9, 21, 5, 7).unwrap();
        app.update_properties(now);
        assert_eq!(app.properties.parse("#time"), "21:05:07");
        assert_eq!(app.properties.parse("#date"), "Sat 09 Mar 2024");
        assert_eq!(app.properties.parse("#channel"), CHANNEL);
    }

    #[test]
    fn test_next_theme() {
        let mut app = app();
        app.apply(Action::NextTheme);
        assert_eq!(app.theme_name, "dracula");
    }
}
