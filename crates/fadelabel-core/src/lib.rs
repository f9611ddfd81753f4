pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod label;
pub mod properties;

pub use color::Argb;
pub use config::{AppConfig, LabelConfig, UiConfig};
pub use error::{Error, Result};
pub use geometry::{Extent, HAlign, Rect, VAlign};
pub use host::{DrawText, HostCall, LabelHost, RecordingHost, Shadow};
pub use label::{FadeScrollLabel, FrameContext, LabelMessage, LabelPhase, RenderedFrame, StyleConfig};
pub use properties::PropertyMap;
