pub mod app;
pub mod event;
pub mod host;
pub mod input;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use host::{CellMetrics, TerminalHost};
pub use theme::Theme;
