//! Per-label animation state and the per-frame inputs/outputs of `render`

use std::time::Duration;

use serde::Serialize;

use crate::color::Argb;
use crate::geometry::Rect;

/// Scroll and fade bookkeeping, reset whenever the text changes
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScrollState {
    /// Index into the label's lines, clamped before use
    pub line_index: usize,
    /// Characters scrolled past the left edge
    pub scroll_position: usize,
    /// Pixels advanced since the line started scrolling
    pub scroll_x: i32,
    /// Summed width of the characters scrolled past
    pub scroll_offset: f32,
    /// Seconds since the text or line changed
    pub elapsed: f64,
    /// Fade frame derived from `elapsed`
    pub frame: u32,
}

impl ScrollState {
    /// Back to the start of the current line
    pub fn rewind(&mut self) {
        self.scroll_position = 0;
        self.scroll_x = 0;
        self.scroll_offset = 0.0;
    }
}

/// Everything the host knows about the frame being rendered
#[derive(Debug, Clone, PartialEq)]
pub struct FrameContext {
    /// Time since the previous frame
    pub elapsed: Duration,
    /// Box the label renders into
    pub bounds: Rect,
    /// Full drawable area
    pub screen: Rect,
    /// Horizontal scroll speed setting, 0-6
    pub scroll_speed: u8,
    /// Bounds the frame pacing counter
    pub max_fps: u32,
    pub visible: bool,
    /// Hidden labels still render while the host is editing a layout
    pub edit_mode: bool,
    /// Dim mask applied to the text color
    pub dim: Option<Argb>,
}

impl FrameContext {
    pub fn new(elapsed: Duration, bounds: Rect, screen: Rect) -> Self {
        Self {
            elapsed,
            bounds,
            screen,
            scroll_speed: 4,
            max_fps: 60,
            visible: true,
            edit_mode: false,
            dim: None,
        }
    }

    pub fn with_scroll_speed(mut self, speed: u8) -> Self {
        self.scroll_speed = speed;
        self
    }

    pub fn with_max_fps(mut self, max_fps: u32) -> Self {
        self.max_fps = max_fps;
        self
    }
}

/// What the label did during a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPhase {
    /// Not visible, nothing drawn
    Hidden,
    /// No lines to show
    Idle,
    /// Single line that fits its box
    Static,
    /// Fading in new text
    FadeIn,
    /// Overflowing line waiting for the scroll delay, or scrolling disabled
    SteadyStatic,
    /// Overflowing line moving
    SteadyScrolling,
    /// Box clipped away, nothing drawn
    Clipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderedFrame {
    pub phase: LabelPhase,
    /// Line shown this frame
    pub line_index: usize,
    /// The line finished a full scroll cycle this frame
    pub cycle_complete: bool,
}

impl RenderedFrame {
    pub(crate) fn nothing(phase: LabelPhase) -> Self {
        Self {
            phase,
            line_index: 0,
            cycle_complete: false,
        }
    }

    pub fn drew(&self) -> bool {
        !matches!(
            self.phase,
            LabelPhase::Hidden | LabelPhase::Idle | LabelPhase::Clipped
        )
    }
}

/// Commands a host can send to a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelMessage {
    /// Replace the text and restart the animation
    Set(String),
    /// Append a line
    Add(String),
    /// Restart the animation, keeping the text
    Reset,
}
