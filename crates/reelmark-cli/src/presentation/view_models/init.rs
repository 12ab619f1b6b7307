use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitStatus {
    Created,
    KeyUpdated,
    LoadedExisting,
}

#[derive(Debug, Serialize)]
pub struct InitResultViewModel {
    pub status: InitStatus,
    pub data_dir: String,
    pub config_path: String,
    pub api_key_configured: bool,
}

/// Shown when `reelmark` runs without a subcommand outside a terminal
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub config_exists: bool,
    pub favorites_count: usize,
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::InitResultView;
        Box::new(InitResultView::new(self))
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}
