use serde::Serialize;
use std::fmt;

use super::CreateView;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Five indicators; `filled[i]` is indicator `i + 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarRowViewModel {
    pub rating: u8,
    pub filled: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieCardViewModel {
    pub id: String,
    pub title: String,
    pub year: Option<String>,
    pub poster_url: String,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub runtime: Option<String>,
    pub external_rating: Option<String>,
    pub is_favorite: bool,
    pub stars: StarRowViewModel,
    /// Detail lookup failed; only summary fields are present
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieGridViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    pub cards: Vec<MovieCardViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDetailViewModel {
    pub id: String,
    pub title: String,
    pub year: Option<String>,
    pub poster_url: String,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub plot: Option<String>,
    pub external_rating: Option<String>,
    pub is_favorite: bool,
    pub stars: StarRowViewModel,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for MovieGridViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::movie::MovieGridView;
        Box::new(MovieGridView::new(self))
    }
}

impl CreateView for MovieDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::movie::MovieDetailView;
        Box::new(MovieDetailView::new(self))
    }
}
