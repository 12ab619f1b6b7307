use reelmark_types::{Listing, MovieDetail, MovieId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Search,
    Favorites,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Search => View::Favorites,
            View::Favorites => View::Search,
        }
    }
}

/// A mounted place where one movie can be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    SearchGrid,
    FavoritesGrid,
    Modal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Replaceable message shown instead of (or above) a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Generation stamp of an issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Issues tickets for one request kind; only the latest is current.
#[derive(Debug, Default)]
pub(crate) struct Generation(u64);

impl Generation {
    pub(crate) fn issue(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }

    /// Make every outstanding ticket stale without issuing a new one.
    pub(crate) fn invalidate(&mut self) {
        self.0 += 1;
    }

    pub(crate) fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.0
    }
}

/// Everything the views render
#[derive(Debug, Clone, Default, Serialize)]
pub struct UiState {
    pub view: View,
    pub search_term: String,
    pub search_loading: bool,
    pub favorites_loading: bool,
    pub search_grid: Vec<Listing>,
    pub favorites_grid: Vec<Listing>,
    /// Notice of the search section
    pub notice: Option<Notice>,
    /// Notice of the favorites section
    pub favorites_notice: Option<Notice>,
    pub modal: Option<MovieDetail>,
}

impl UiState {
    pub fn grid(&self, view: View) -> &[Listing] {
        match view {
            View::Search => &self.search_grid,
            View::Favorites => &self.favorites_grid,
        }
    }

    pub fn visible_grid(&self) -> &[Listing] {
        self.grid(self.view)
    }

    pub fn visible_notice(&self) -> Option<&Notice> {
        match self.view {
            View::Search => self.notice.as_ref(),
            View::Favorites => self.favorites_notice.as_ref(),
        }
    }

    /// Notice slot of the visible section.
    pub fn visible_notice_mut(&mut self) -> &mut Option<Notice> {
        match self.view {
            View::Search => &mut self.notice,
            View::Favorites => &mut self.favorites_notice,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.view {
            View::Search => self.search_loading,
            View::Favorites => self.favorites_loading,
        }
    }

    /// Surfaces currently displaying `id`.
    pub fn surfaces_showing(&self, id: &MovieId) -> Vec<Surface> {
        let mut surfaces = Vec::new();
        if self.search_grid.iter().any(|listing| listing.id() == id) {
            surfaces.push(Surface::SearchGrid);
        }
        if self.favorites_grid.iter().any(|listing| listing.id() == id) {
            surfaces.push(Surface::FavoritesGrid);
        }
        if self.modal.as_ref().is_some_and(|detail| &detail.id == id) {
            surfaces.push(Surface::Modal);
        }
        surfaces
    }
}
