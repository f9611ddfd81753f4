//! Dracula, https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36),
        surface: Color::Rgb(0x44, 0x47, 0x5a),
        text: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x62, 0x72, 0xa4),
        border: Color::Rgb(0x44, 0x47, 0x5a),
        selected: Color::Rgb(0xbd, 0x93, 0xf9), // purple
        phase_still: Color::Rgb(0x8b, 0xe9, 0xfd),
        phase_waiting: Color::Rgb(0xf1, 0xfa, 0x8c),
        phase_moving: Color::Rgb(0xff, 0x79, 0xc6),
    }
}
