//! Fading, auto-scrolling text label
//!
//! A label owns its text, splits it into display lines, fades new text in
//! over a fixed number of frames and scrolls lines that overflow their box.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `lines` - Splitting resolved text into display lines
//! - `timing` - Fade frames, scroll advance and frame pacing
//! - `style` - Style values and wrap string handling
//!
//! ## L3 Molecular Layer
//! - `fade_label` - The label control combining the atoms
//!
//! # Usage
//!
//! ```ignore
//! use fadelabel_core::label::{FadeScrollLabel, FrameContext, StyleConfig};
//!
//! let mut label = FadeScrollLabel::with_text(style, "Now playing: #title");
//!
//! // once per frame
//! let ctx = FrameContext::new(frame_time, bounds, screen).with_scroll_speed(4);
//! let rendered = label.render(&ctx, &mut host);
//! ```

// L4 Atomic Layer
pub mod lines;
pub mod style;
pub mod timing;

pub mod state;

// L3 Molecular Layer
pub mod fade_label;

// Re-exports for convenient access
pub use fade_label::FadeScrollLabel;
pub use lines::{split_lines, LINE_SEPARATOR};
pub use state::{FrameContext, LabelMessage, LabelPhase, RenderedFrame, ScrollState};
pub use style::{StyleConfig, WrapString};
