use serde::Serialize;
use std::fmt;

use super::{CreateView, StarRowViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    Favorite,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceChangeViewModel {
    pub kind: PreferenceKind,
    pub id: String,
    pub is_favorite: bool,
    pub stars: StarRowViewModel,
}

impl CreateView for PreferenceChangeViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::preference::PreferenceChangeView;
        Box::new(PreferenceChangeView::new(self))
    }
}
