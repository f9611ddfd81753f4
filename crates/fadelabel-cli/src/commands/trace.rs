use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use fadelabel_core::{
    FadeScrollLabel, FrameContext, HAlign, HostCall, Rect, RecordingHost, RenderedFrame,
    StyleConfig,
};

/// Pixels per character in the recording host
const CHAR_WIDTH: f32 = 10.0;
const LINE_HEIGHT: f32 = 20.0;
/// Widest box traced; padding grows the text up to the box width
const MAX_WIDTH: f32 = 100_000.0;

pub struct TraceOptions {
    pub text: String,
    pub frames: u32,
    pub width: f32,
    pub speed: u8,
    pub wrap: String,
    pub align: HAlign,
    pub fade_in: bool,
    pub fps: u32,
    pub delay_secs: u32,
}

/// One JSON line of trace output
#[derive(Serialize)]
struct TraceFrame<'a> {
    frame: u32,
    time_ms: u64,
    #[serde(flatten)]
    rendered: RenderedFrame,
    scroll_x: i32,
    calls: &'a [HostCall],
}

pub fn run(options: &TraceOptions, out: &mut impl Write) -> Result<()> {
    let style = StyleConfig {
        font: RecordingHost::DEFAULT_FONT.to_string(),
        align: options.align,
        wrap_string: options.wrap.clone(),
        scroll_start_delay_secs: options.delay_secs,
        allow_fade_in: options.fade_in,
        ..Default::default()
    };
    let mut label = FadeScrollLabel::with_text(style, options.text.clone());
    let mut host = RecordingHost::new(CHAR_WIDTH, LINE_HEIGHT);

    let fps = options.fps.max(1);
    let frame_time = Duration::from_secs(1) / fps;
    let bounds = Rect::new(0.0, 0.0, options.width.clamp(0.0, MAX_WIDTH), LINE_HEIGHT);
    let screen = Rect::new(0.0, 0.0, bounds.width.max(1920.0), 1080.0);

    info!(frames = options.frames, fps, width = bounds.width, "Tracing label");

    let mut cycles = 0u32;
    let mut drawn = 0u32;
    for frame in 0..options.frames {
        let ctx = FrameContext::new(frame_time, bounds, screen)
            .with_scroll_speed(options.speed)
            .with_max_fps(fps);
        let rendered = label.render(&ctx, &mut host);
        if rendered.cycle_complete {
            cycles += 1;
        }
        if rendered.drew() {
            drawn += 1;
        }

        let calls = host.drain();
        let line = TraceFrame {
            frame,
            time_ms: (frame_time * frame).as_millis() as u64,
            rendered,
            scroll_x: label.scroll_state().scroll_x,
            calls: &calls,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }

    info!(cycles, drawn, "Trace finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(text: &str) -> TraceOptions {
        TraceOptions {
            text: text.to_string(),
            frames: 5,
            width: 200.0,
            speed: 4,
            wrap: String::new(),
            align: HAlign::Left,
            fade_in: false,
            fps: 30,
            delay_secs: 0,
        }
    }

    fn trace(options: &TraceOptions) -> Vec<serde_json::Value> {
        let mut out = Vec::new();
        run(options, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_one_json_line_per_frame() {
        let frames = trace(&options("Hello"));
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0]["phase"], "static");
        assert_eq!(frames[0]["calls"][0]["call"], "draw");
        assert_eq!(frames[0]["calls"][0]["text"], "Hello");
        assert_eq!(frames[4]["frame"], 4);
    }

    #[test]
    fn test_overflowing_text_scrolls() {
        let frames = trace(&options("This line is far too wide for a twenty character box"));
        let last = frames.last().unwrap();
        assert_eq!(last["phase"], "steady_scrolling");
        assert!(last["scroll_x"].as_i64().unwrap() > 0);
        assert_eq!(last["calls"][0]["call"], "set_clip");
    }

    #[test]
    fn test_width_is_capped() {
        let mut opts = options("0123456789abcdef\rsecond line");
        opts.frames = 1;
        opts.width = f32::INFINITY;
        let frames = trace(&opts);
        assert_eq!(frames[0]["phase"], "steady_scrolling");
        assert_eq!(frames[0]["calls"][0]["width"], 100_000.0);
    }
}
