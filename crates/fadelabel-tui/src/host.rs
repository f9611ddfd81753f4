//! Terminal implementation of the label host contract
//!
//! Labels work in virtual pixels: each terminal column is `cell_px` wide and
//! each row `row_px` tall. Sub-cell scroll advances accumulate until the text
//! crosses a column boundary, which keeps slow speeds readable.

use fadelabel_core::geometry::{Extent, HAlign, Rect, VAlign};
use fadelabel_core::host::{DrawText, LabelHost};
use fadelabel_core::{Argb, PropertyMap};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Virtual pixel scale of a terminal grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_px: f32,
    pub row_px: f32,
}

impl CellMetrics {
    pub fn new(cell_px: f32) -> Self {
        let cell_px = cell_px.max(1.0);
        Self {
            cell_px,
            row_px: cell_px * 2.0,
        }
    }

    /// Convert a cell rectangle to virtual pixels
    pub fn to_px(&self, area: CellRect) -> Rect {
        Rect::new(
            area.x as f32 * self.cell_px,
            area.y as f32 * self.row_px,
            area.width as f32 * self.cell_px,
            area.height as f32 * self.row_px,
        )
    }
}

/// Draws label text into a ratatui buffer.
///
/// Shadows are not drawn; a cell grid has no room for an offset glyph.
pub struct TerminalHost<'a> {
    buf: &'a mut Buffer,
    metrics: CellMetrics,
    background: Color,
    properties: &'a PropertyMap,
    clip: Option<Rect>,
}

impl<'a> TerminalHost<'a> {
    pub fn new(
        buf: &'a mut Buffer,
        metrics: CellMetrics,
        background: Color,
        properties: &'a PropertyMap,
    ) -> Self {
        Self {
            buf,
            metrics,
            background,
            properties,
            clip: None,
        }
    }

    /// Columns `[start, end)` a pixel span fully covers
    fn columns(&self, rect: &Rect) -> (i64, i64) {
        let start = (rect.x / self.metrics.cell_px).ceil() as i64;
        let end = (rect.right() / self.metrics.cell_px).floor() as i64;
        (start, end)
    }
}

impl LabelHost for TerminalHost<'_> {
    fn text_extent(&self, font: &str, text: &str) -> Option<Extent> {
        if font.is_empty() {
            return None;
        }
        Some(Extent::new(
            text.width() as f32 * self.metrics.cell_px,
            self.metrics.row_px,
        ))
    }

    fn draw_text(&mut self, cmd: &DrawText) {
        if cmd.color.alpha() == 0 || cmd.text.is_empty() {
            return;
        }

        let metrics = self.metrics;
        let text_width = cmd.text.width() as f32 * metrics.cell_px;
        let rect = cmd.rect;

        let x = match cmd.align {
            HAlign::Left => rect.x,
            HAlign::Center => rect.x + (rect.width - text_width) / 2.0,
            HAlign::Right => rect.right() - text_width,
        };
        let y = match cmd.valign {
            VAlign::Top => rect.y,
            VAlign::Middle => rect.y + (rect.height - metrics.row_px) / 2.0,
            VAlign::Bottom => rect.bottom() - metrics.row_px,
        };

        let row = (y / metrics.row_px).round() as i64;
        let screen = self.buf.area;
        if row < screen.y as i64 || row >= screen.bottom() as i64 {
            return;
        }

        let (mut min_col, mut max_col) = (screen.x as i64, screen.right() as i64);
        if let Some(clip) = self.clip {
            let clip_top = (clip.y / metrics.row_px).floor() as i64;
            let clip_bottom = (clip.bottom() / metrics.row_px).ceil() as i64;
            if row < clip_top || row >= clip_bottom {
                return;
            }
            let (start, end) = self.columns(&clip);
            min_col = min_col.max(start);
            max_col = max_col.min(end);
        }

        let style = Style::default().fg(blend(cmd.color, self.background));
        let mut col_px = x;
        for ch in cmd.text.chars() {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            let col = (col_px / metrics.cell_px).floor() as i64;
            col_px += width as f32 * metrics.cell_px;
            if col < min_col || col + width as i64 > max_col {
                continue;
            }
            let mut utf8 = [0u8; 4];
            self.buf.set_stringn(
                col as u16,
                row as u16,
                ch.encode_utf8(&mut utf8),
                width,
                style,
            );
        }
    }

    fn set_clip(&mut self, rect: Rect) {
        self.clip = Some(rect);
    }

    fn clear_clip(&mut self) {
        self.clip = None;
    }

    fn resolve_properties(&self, text: &str) -> Option<String> {
        Some(self.properties.parse(text))
    }
}

/// Mix a translucent label color over the terminal background
pub fn blend(color: Argb, background: Color) -> Color {
    let (r, g, b) = color.rgb();
    let alpha = color.alpha() as u16;
    let (br, bg, bb) = match background {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let mix = |fg: u8, bg: u8| ((fg as u16 * alpha + bg as u16 * (255 - alpha)) / 255) as u8;
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fadelabel_core::host::Shadow;

    fn row_text(buf: &Buffer, row: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect()
    }

    fn draw(text: &str, rect: Rect, align: HAlign) -> DrawText {
        DrawText {
            text: text.to_string(),
            font: "default".to_string(),
            rect,
            color: Argb::WHITE,
            shadow: Shadow::default(),
            align,
            valign: VAlign::Top,
        }
    }

    #[test]
    fn test_extent_uses_display_width() {
        let mut buf = Buffer::empty(CellRect::new(0, 0, 10, 1));
        let props = PropertyMap::new();
        let host = TerminalHost::new(&mut buf, CellMetrics::new(8.0), Color::Black, &props);

        assert_eq!(host.text_extent("default", "abc"), Some(Extent::new(24.0, 16.0)));
        assert_eq!(host.text_extent("default", "日本").unwrap().width, 32.0);
        assert_eq!(host.text_extent("", "abc"), None);
    }

    #[test]
    fn test_draw_alignment() {
        let mut buf = Buffer::empty(CellRect::new(0, 0, 10, 1));
        let props = PropertyMap::new();
        let metrics = CellMetrics::new(8.0);
        let area = metrics.to_px(CellRect::new(0, 0, 10, 1));
        {
            let mut host = TerminalHost::new(&mut buf, metrics, Color::Black, &props);
            host.draw_text(&draw("ab", area, HAlign::Right));
        }
        assert_eq!(row_text(&buf, 0), "        ab");

        let mut buf = Buffer::empty(CellRect::new(0, 0, 10, 1));
        {
            let mut host = TerminalHost::new(&mut buf, metrics, Color::Black, &props);
            host.draw_text(&draw("ab", area, HAlign::Center));
        }
        assert_eq!(row_text(&buf, 0), "    ab    ");
    }

    #[test]
    fn test_clip_and_sub_cell_offset() {
        let mut buf = Buffer::empty(CellRect::new(0, 0, 10, 1));
        let props = PropertyMap::new();
        let metrics = CellMetrics::new(8.0);
        {
            let mut host = TerminalHost::new(&mut buf, metrics, Color::Black, &props);
            host.set_clip(Rect::new(16.0, 0.0, 32.0, 16.0));
            // starts 1.5 cells left of the screen edge
            host.draw_text(&draw("0123456789", Rect::new(-12.0, 0.0, 200.0, 16.0), HAlign::Left));
            host.clear_clip();
        }
        assert_eq!(row_text(&buf, 0), "  4567    ");
    }

    #[test]
    fn test_transparent_text_is_skipped() {
        let mut buf = Buffer::empty(CellRect::new(0, 0, 4, 1));
        let props = PropertyMap::new();
        let metrics = CellMetrics::new(8.0);
        {
            let mut host = TerminalHost::new(&mut buf, metrics, Color::Black, &props);
            let mut cmd = draw("ab", metrics.to_px(buf_area()), HAlign::Left);
            cmd.color = Argb::WHITE.with_alpha(0);
            host.draw_text(&cmd);
        }
        assert_eq!(row_text(&buf, 0), "    ");
    }

    fn buf_area() -> CellRect {
        CellRect::new(0, 0, 4, 1)
    }

    #[test]
    fn test_blend() {
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(Argb(0xFFFF_FFFF), bg), Color::Rgb(255, 255, 255));
        assert_eq!(blend(Argb(0x80FF_FFFF), bg), Color::Rgb(128, 128, 128));
        assert_eq!(blend(Argb(0x0012_3456), Color::Rgb(10, 20, 30)), Color::Rgb(10, 20, 30));
    }
}
