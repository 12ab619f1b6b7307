use std::fmt;

use crate::presentation::formatters::star_glyphs;
use crate::presentation::view_models::PreferenceChangeViewModel;

pub struct PreferenceChangeView<'a> {
    data: &'a PreferenceChangeViewModel,
}

impl<'a> PreferenceChangeView<'a> {
    pub fn new(data: &'a PreferenceChangeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PreferenceChangeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}  favorite: {}  rating: {}",
            self.data.id,
            if self.data.is_favorite { "yes" } else { "no" },
            star_glyphs(&self.data.stars.filled)
        )
    }
}
