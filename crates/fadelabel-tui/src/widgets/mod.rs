mod label_panel;
mod status_bar;

pub use label_panel::{phase_name, LabelPanelWidget};
pub use status_bar::StatusBarWidget;
