//! Host contract for label rendering
//!
//! The label never touches a device. It asks the host to measure text, to
//! draw text into a rectangle and to clip. The same calls are made whether
//! the host is a GPU renderer, a terminal buffer or the headless
//! [`RecordingHost`] used by tests and the `trace` command.

use serde::Serialize;

use crate::color::Argb;
use crate::geometry::{Extent, HAlign, Rect, VAlign};
use crate::properties::PropertyMap;

/// Drop shadow parameters forwarded to the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Shadow {
    pub color: Argb,
    /// Degrees, zero along the x axis
    pub angle: i32,
    pub distance: i32,
}

/// A single text draw request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawText {
    pub text: String,
    pub font: String,
    /// Area the text is aligned within
    pub rect: Rect,
    pub color: Argb,
    pub shadow: Shadow,
    pub align: HAlign,
    pub valign: VAlign,
}

pub trait LabelHost {
    /// Measure `text` in `font`; `None` when the font is unknown
    fn text_extent(&self, font: &str, text: &str) -> Option<Extent>;

    fn draw_text(&mut self, cmd: &DrawText);

    fn set_clip(&mut self, rect: Rect);

    /// Restore the full-screen clip
    fn clear_clip(&mut self);

    /// Substitute `#property` tokens; `None` is treated as empty text
    fn resolve_properties(&self, text: &str) -> Option<String> {
        Some(text.to_string())
    }
}

/// Calls observed by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    Draw(DrawText),
    SetClip(Rect),
    ClearClip,
}

/// Headless host with fixed-advance glyphs that records every call
#[derive(Debug, Clone)]
pub struct RecordingHost {
    fonts: Vec<String>,
    pub char_width: f32,
    pub line_height: f32,
    pub properties: PropertyMap,
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub const DEFAULT_FONT: &'static str = "mono";

    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            fonts: vec![Self::DEFAULT_FONT.to_string()],
            char_width,
            line_height,
            properties: PropertyMap::new(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Take the calls recorded since the last drain
    pub fn drain(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn draws(&self) -> impl Iterator<Item = &DrawText> {
        self.calls.iter().filter_map(|c| match c {
            HostCall::Draw(d) => Some(d),
            _ => None,
        })
    }

    pub fn last_draw(&self) -> Option<&DrawText> {
        self.draws().last()
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

impl LabelHost for RecordingHost {
    fn text_extent(&self, font: &str, text: &str) -> Option<Extent> {
        if !self.fonts.iter().any(|f| f == font) {
            return None;
        }
        let chars = text.chars().count() as f32;
        Some(Extent::new(chars * self.char_width, self.line_height))
    }

    fn draw_text(&mut self, cmd: &DrawText) {
        self.calls.push(HostCall::Draw(cmd.clone()));
    }

    fn set_clip(&mut self, rect: Rect) {
        self.calls.push(HostCall::SetClip(rect));
    }

    fn clear_clip(&mut self) {
        self.calls.push(HostCall::ClearClip);
    }

    fn resolve_properties(&self, text: &str) -> Option<String> {
        Some(self.properties.parse(text))
    }
}
