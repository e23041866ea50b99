//! Page modules

pub mod panel;

pub use panel::PanelPage;
