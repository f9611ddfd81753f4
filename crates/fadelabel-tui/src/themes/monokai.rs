//! Monokai classic, https://monokai.pro/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x27, 0x28, 0x22),
        surface: Color::Rgb(0x3e, 0x3d, 0x32),
        text: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x75, 0x71, 0x5e),
        border: Color::Rgb(0x49, 0x48, 0x3e),
        selected: Color::Rgb(0xa6, 0xe2, 0x2e),
        phase_still: Color::Rgb(0x66, 0xd9, 0xef),
        phase_waiting: Color::Rgb(0xe6, 0xdb, 0x74),
        phase_moving: Color::Rgb(0xfd, 0x97, 0x1f),
    }
}
