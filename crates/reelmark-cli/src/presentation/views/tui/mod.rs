//! TUI View Components
//!
//! Ratatui widgets for the interactive browser. Each view is a thin wrapper
//! around a ViewModel; color mapping from StatusLevel happens here.

pub mod components;
pub mod grid;
pub mod modal;
pub mod notice;
pub mod search_box;
pub mod status_bar;
pub mod tabs;

pub use grid::MovieListView;
pub use modal::MovieModalView;
pub use notice::NoticeView;
pub use search_box::SearchBoxView;
pub use status_bar::StatusBarView;
pub use tabs::TabsView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
