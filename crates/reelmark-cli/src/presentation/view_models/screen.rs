//! ViewModels of the interactive browser.
//!
//! Snapshot of WHAT is on screen. Focus and selection are component state
//! and live in `views::tui::components`.

use reelmark_runtime::View;
use serde::Serialize;

use super::{MovieDetailViewModel, MovieGridViewModel, StatusLevel};

#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub tabs: TabsViewModel,
    pub search_box: SearchBoxViewModel,
    pub grid: MovieGridViewModel,
    pub loading: bool,
    pub notice: Option<NoticeViewModel>,
    pub modal: Option<MovieDetailViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabsViewModel {
    pub active: View,
    pub favorites_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchBoxViewModel {
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeViewModel {
    pub level: StatusLevel,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub view: View,
    pub card_count: usize,
    pub loading: bool,
}
