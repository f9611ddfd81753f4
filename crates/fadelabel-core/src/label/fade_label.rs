//! L3 Molecular Layer: the fade/scroll label control
//!
//! Combines line splitting, fade timing and scroll stepping. The host calls
//! [`FadeScrollLabel::render`] once per frame with the elapsed time and the
//! target box; all drawing goes through [`LabelHost`].

use std::borrow::Cow;

use tracing::{debug, trace};

use super::lines::{split_lines, LINE_SEPARATOR};
use super::state::{FrameContext, LabelMessage, LabelPhase, RenderedFrame, ScrollState};
use super::style::{StyleConfig, WrapString};
use super::timing::{fade_frame, next_frame_limiter, scroll_advance, FADE_FRAMES};
use crate::color::Argb;
use crate::geometry::{HAlign, Rect, VAlign};
use crate::host::{DrawText, LabelHost, Shadow};
use crate::properties::PROPERTY_MARKER;

/// Outcome of the steady-state text pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollStep {
    /// Waiting for the start delay, drawn without moving
    Waiting,
    Scrolled,
    /// The line scrolled out completely
    Completed,
    /// Nothing visible to draw into
    Clipped,
}

/// A text label that fades in and scrolls lines wider than its box
#[derive(Debug, Clone)]
pub struct FadeScrollLabel {
    style: StyleConfig,
    wrap: WrapString,
    /// Raw text as set by the host, may contain `#properties`
    label: String,
    contains_property: bool,
    /// Resolved text the current lines were split from
    previous_text: String,
    lines: Vec<String>,
    state: ScrollState,
    frame_limiter: u32,
    fade_in: bool,
    is_scrolling: bool,
}

impl FadeScrollLabel {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            wrap: style.wrap(),
            style,
            label: String::new(),
            contains_property: false,
            previous_text: String::new(),
            lines: Vec::new(),
            state: ScrollState::default(),
            frame_limiter: 1,
            fade_in: false,
            is_scrolling: false,
        }
    }

    pub fn with_text(style: StyleConfig, text: impl Into<String>) -> Self {
        let mut label = Self::new(style);
        label.set_text(text);
        label
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.wrap = style.wrap();
        self.style = style;
    }

    /// Raw, unresolved text
    pub fn text(&self) -> &str {
        &self.label
    }

    /// Store new raw text; it is resolved and split on the next render
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label = text.into();
        self.contains_property = self.label.contains(PROPERTY_MARKER);
    }

    /// Add a line to the label
    pub fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.label.is_empty() {
            self.set_text(text);
        } else {
            let mut joined = std::mem::take(&mut self.label);
            joined.push(LINE_SEPARATOR);
            joined.push_str(text);
            self.set_text(joined);
        }
    }

    /// Drop the split lines and restart scrolling and fading
    pub fn reset_display(&mut self) {
        self.previous_text.clear();
        self.lines.clear();
        self.state = ScrollState::default();
        self.fade_in = self.style.allow_fade_in;
        self.frame_limiter = 1;
    }

    pub fn handle_message(&mut self, message: LabelMessage) {
        match message {
            LabelMessage::Set(text) => {
                self.reset_display();
                self.set_text(text);
            }
            LabelMessage::Add(text) => self.append_text(&text),
            LabelMessage::Reset => self.reset_display(),
        }
    }

    pub fn allow_scrolling(&self) -> bool {
        self.style.allow_scrolling
    }

    pub fn set_allow_scrolling(&mut self, allow: bool) {
        if !allow {
            self.state.elapsed = 0.0;
        }
        self.style.allow_scrolling = allow;
    }

    pub fn allow_fade_in(&self) -> bool {
        self.style.allow_fade_in
    }

    pub fn set_allow_fade_in(&mut self, allow: bool) {
        self.style.allow_fade_in = allow;
    }

    pub fn has_text(&self) -> bool {
        !self.lines.is_empty()
    }

    /// The label animates and must be redrawn every frame
    pub fn needs_refresh(&self) -> bool {
        self.is_scrolling && self.style.allow_scrolling
    }

    pub fn is_fading_in(&self) -> bool {
        self.fade_in
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.state
    }

    /// Advance the animation by one frame and draw it through `host`
    pub fn render<H: LabelHost + ?Sized>(
        &mut self,
        ctx: &FrameContext,
        host: &mut H,
    ) -> RenderedFrame {
        if !ctx.visible && !ctx.edit_mode {
            return RenderedFrame::nothing(LabelPhase::Hidden);
        }

        self.is_scrolling = false;
        self.refresh_lines(host);

        if self.lines.is_empty() {
            return RenderedFrame::nothing(LabelPhase::Idle);
        }

        if self.state.line_index >= self.lines.len() {
            self.state.line_index = 0;
        }
        let index = self.state.line_index;

        let Some(font) = self.style.font().map(str::to_owned) else {
            return RenderedFrame::nothing(LabelPhase::Idle);
        };
        let Some(extent) = host.text_extent(&font, &self.lines[index]) else {
            return RenderedFrame::nothing(LabelPhase::Idle);
        };

        if self.lines.len() == 1 && extent.width < ctx.bounds.width {
            host.draw_text(&DrawText {
                text: self.lines[index].clone(),
                font,
                rect: ctx.bounds,
                color: self.steady_color(ctx),
                shadow: self.style.shadow(),
                align: self.style.align,
                valign: self.style.valign,
            });
            return RenderedFrame {
                phase: LabelPhase::Static,
                line_index: index,
                cycle_complete: false,
            };
        }

        let mut line = self.lines[index].clone();
        line.push_str(&self.wrap.join);

        self.state.elapsed += ctx.elapsed.as_secs_f64();
        self.state.frame = fade_frame(self.state.elapsed, ctx.scroll_speed);
        self.frame_limiter = next_frame_limiter(self.frame_limiter, ctx.max_fps);
        self.is_scrolling = true;

        if self.fade_in {
            if self.style.allow_scrolling {
                self.draw_fade_frame(ctx, host, &font, &line);
                if self.state.frame >= FADE_FRAMES {
                    self.fade_in = false;
                }
            } else {
                self.fade_in = false;
            }
        }

        if self.fade_in {
            return RenderedFrame {
                phase: LabelPhase::FadeIn,
                line_index: index,
                cycle_complete: false,
            };
        }

        if !self.style.allow_scrolling {
            self.state = ScrollState::default();
        }

        let step = self.scroll_text(ctx, host, &font, &line);
        let cycle_complete = step == ScrollStep::Completed;
        if cycle_complete {
            self.state.line_index += 1;
            self.state.rewind();
            self.state.frame = 0;
            // a single wrapping line keeps moving without a new start delay
            if !self.wrap.wraps_around() || self.lines.len() > 1 {
                self.state.elapsed = 0.0;
            }
            trace!(line = index, "label line completed a scroll cycle");
        }

        let phase = match step {
            ScrollStep::Waiting => LabelPhase::SteadyStatic,
            ScrollStep::Scrolled | ScrollStep::Completed => LabelPhase::SteadyScrolling,
            ScrollStep::Clipped => LabelPhase::Clipped,
        };

        RenderedFrame {
            phase,
            line_index: index,
            cycle_complete,
        }
    }

    /// Resolve the raw text and re-split it when it changed
    fn refresh_lines<H: LabelHost + ?Sized>(&mut self, host: &H) {
        if self.label.is_empty() {
            self.lines.clear();
            self.previous_text.clear();
            return;
        }

        let resolved: Cow<'_, str> = if self.contains_property {
            Cow::Owned(host.resolve_properties(&self.label).unwrap_or_default())
        } else {
            Cow::Borrowed(self.label.as_str())
        };

        if *resolved != *self.previous_text {
            self.state = ScrollState::default();
            self.fade_in = self.style.allow_fade_in;
            self.lines = split_lines(&resolved);
            debug!(lines = self.lines.len(), "label text changed");
            self.previous_text = resolved.into_owned();
        }
    }

    fn steady_color(&self, ctx: &FrameContext) -> Argb {
        match ctx.dim {
            Some(mask) => self.style.text_color.dimmed(mask),
            None => self.style.text_color,
        }
    }

    fn draw_fade_frame<H: LabelHost + ?Sized>(
        &self,
        ctx: &FrameContext,
        host: &mut H,
        font: &str,
        line: &str,
    ) {
        let frame = self.state.frame;
        let shadow = Shadow {
            color: self.style.shadow_color.scale_alpha(frame, FADE_FRAMES),
            ..self.style.shadow()
        };
        let (text, _) = shortened(host, font, self.style.align, line, ctx.bounds.width);

        host.draw_text(&DrawText {
            text,
            font: font.to_string(),
            rect: ctx.bounds,
            color: self.style.text_color.scale_alpha(frame, FADE_FRAMES),
            shadow,
            align: self.style.align,
            valign: self.style.valign,
        });
    }

    fn scroll_text<H: LabelHost + ?Sized>(
        &mut self,
        ctx: &FrameContext,
        host: &mut H,
        font: &str,
        text: &str,
    ) -> ScrollStep {
        let bounds = ctx.bounds;
        let screen = ctx.screen;
        let align = self.style.align;
        let valign = self.style.valign;

        if !bounds.is_finite() || !screen.is_finite() || !(screen.height > 0.0) {
            return ScrollStep::Clipped;
        }
        let Some(extent) = host.text_extent(font, text) else {
            return ScrollStep::Clipped;
        };
        let max_width = bounds.width;

        let mut clip_y = bounds.y.max(screen.y).min(screen.bottom());
        if align == HAlign::Center || valign == VAlign::Middle {
            clip_y += (bounds.height - extent.height) / 2.0;
        } else if valign == VAlign::Bottom {
            clip_y += bounds.height - extent.height;
        }

        let mut clip_height = extent.height;
        if clip_y + clip_height >= screen.bottom() {
            clip_height = screen.bottom() - clip_y - 1.0;
        }
        if clip_height < 1.0 || max_width < 1.0 {
            return ScrollStep::Clipped;
        }

        let clip_x = bounds.x.max(screen.x);
        host.set_clip(Rect::new(clip_x, clip_y, max_width, clip_height));

        let color = self.steady_color(ctx);
        let shadow = self.style.shadow();

        if self.state.elapsed <= self.style.scroll_start_delay_secs as f64 {
            let (short, _) = shortened(host, font, align, text, max_width);
            host.draw_text(&DrawText {
                text: short,
                font: font.to_string(),
                rect: bounds,
                color,
                shadow,
                align,
                valign,
            });
            host.clear_clip();
            return ScrollStep::Waiting;
        }

        let mut padded = text.to_string();
        let mut padded_width = extent.width;
        if align != HAlign::Right {
            padded_width = pad_to_width(host, font, &mut padded, &self.wrap.tail, max_width);
        }

        if self.style.allow_scrolling {
            self.state.scroll_x += scroll_advance(ctx.scroll_speed, self.frame_limiter);
        }

        let chars: Vec<char> = padded.chars().collect();
        let current = chars.get(self.state.scroll_position).copied().unwrap_or(' ');
        let char_width = measure(host, font, current.encode_utf8(&mut [0u8; 4]));

        let mut completed = false;
        if self.state.scroll_x as f32 - self.state.scroll_offset >= char_width {
            self.state.scroll_position += 1;
            if self.state.scroll_position > text.chars().count() {
                self.state.scroll_position = 0;
                completed = true;
                if !self.wrap.wraps_around() {
                    host.clear_clip();
                    return ScrollStep::Completed;
                }
                // a wrapping label keeps drawing so the seam does not flash
            }
            self.state.scroll_offset += char_width;
        }

        let visible = compose_visible(&chars, self.state.scroll_position, self.wrap.wraps_around());
        let shift = self.state.scroll_offset - self.state.scroll_x as f32;
        let draw_width = max_width - shift;

        let rect = match align {
            HAlign::Right => {
                let (_, probe_width) = shortened(host, font, HAlign::Right, &padded, bounds.width);
                Rect::new(bounds.right() - probe_width + shift, bounds.y, draw_width, bounds.height)
            }
            HAlign::Center => Rect::new(
                bounds.x + shift + (bounds.width - padded_width) / 2.0,
                bounds.y + (bounds.height - extent.height) / 2.0,
                draw_width,
                extent.height,
            ),
            HAlign::Left => Rect::new(bounds.x + shift, bounds.y, draw_width, bounds.height),
        };

        host.draw_text(&DrawText {
            text: visible,
            font: font.to_string(),
            rect,
            color,
            shadow,
            align: HAlign::Left,
            valign: if align == HAlign::Center { VAlign::Top } else { valign },
        });
        host.clear_clip();

        if completed {
            ScrollStep::Completed
        } else {
            ScrollStep::Scrolled
        }
    }
}

fn measure<H: LabelHost + ?Sized>(host: &H, font: &str, text: &str) -> f32 {
    host.text_extent(font, text).map(|e| e.width).unwrap_or(0.0)
}

/// Right-aligned text loses trailing characters until it is narrower than
/// `max_width`; other alignments rely on clipping and keep the full text.
fn shortened<H: LabelHost + ?Sized>(
    host: &H,
    font: &str,
    align: HAlign,
    text: &str,
    max_width: f32,
) -> (String, f32) {
    if text.is_empty() {
        return (String::new(), 0.0);
    }
    if align != HAlign::Right {
        return (text.to_string(), measure(host, font, text));
    }

    let mut end = text.len();
    loop {
        let candidate = &text[..end];
        let width = measure(host, font, candidate);
        let mut indices = candidate.char_indices();
        let last = indices.next_back().map(|(i, _)| i).unwrap_or(0);
        if width < max_width || last == 0 {
            return (candidate.to_string(), width);
        }
        end = last;
    }
}

/// Append `tail` until the text is at least `max_width` wide.
///
/// The text and the tail are measured once and the width grows by the tail
/// width per append. One extra tail always ends up behind the last width
/// checked, which is the width returned.
fn pad_to_width<H: LabelHost + ?Sized>(
    host: &H,
    font: &str,
    text: &mut String,
    tail: &str,
    max_width: f32,
) -> f32 {
    let tail_width = measure(host, font, tail);
    let mut width = measure(host, font, text);
    loop {
        text.push_str(tail);
        // zero-width tails would never reach the box width
        if width >= max_width || tail_width <= 0.0 {
            return width;
        }
        width += tail_width;
    }
}

/// Text visible from `position` onward; the head fills the tail when
/// wrapping, blanks otherwise
fn compose_visible(chars: &[char], position: usize, wrap_around: bool) -> String {
    let (head, rest) = chars.split_at(position.min(chars.len()));
    let mut visible: String = rest.iter().collect();
    if wrap_around {
        visible.extend(head.iter());
    } else {
        visible.extend(std::iter::repeat(' ').take(head.len()));
    }
    visible
}
