use std::fmt;

use crate::presentation::formatters::{join_present, star_glyphs, truncate};
use crate::presentation::view_models::{MovieDetailViewModel, MovieGridViewModel};

const TITLE_WIDTH: usize = 40;

// --------------------------------------------------------
// Movie Grid View
// --------------------------------------------------------

pub struct MovieGridView<'a> {
    data: &'a MovieGridViewModel,
}

impl<'a> MovieGridView<'a> {
    pub fn new(data: &'a MovieGridViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MovieGridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(notice) = &self.data.notice {
            writeln!(f, "{}", notice)?;
            return Ok(());
        }

        if self.data.cards.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{:<11} {:<width$} {:<6} {:<5} {}",
            "ID",
            "TITLE",
            "YEAR",
            "FAV",
            "RATING",
            width = TITLE_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(80))?;

        for card in &self.data.cards {
            writeln!(
                f,
                "{:<11} {:<width$} {:<6} {:<5} {}",
                card.id,
                truncate(&card.title, TITLE_WIDTH),
                card.year.as_deref().unwrap_or("-"),
                if card.is_favorite { "♥" } else { "" },
                star_glyphs(&card.stars.filled),
                width = TITLE_WIDTH
            )?;

            let details = join_present(
                &[
                    card.genre.as_deref(),
                    card.director.as_deref(),
                    card.runtime.as_deref(),
                ],
                " · ",
            );
            if card.degraded {
                writeln!(f, "{:<11} (details unavailable)", "")?;
            } else if !details.is_empty() {
                writeln!(f, "{:<11} {}", "", details)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Movie Detail View
// --------------------------------------------------------

pub struct MovieDetailView<'a> {
    data: &'a MovieDetailViewModel,
}

impl<'a> MovieDetailView<'a> {
    pub fn new(data: &'a MovieDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MovieDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        match &d.year {
            Some(year) => writeln!(f, "{} ({})", d.title, year)?,
            None => writeln!(f, "{}", d.title)?,
        }
        writeln!(f, "{}", "=".repeat(d.title.chars().count().clamp(10, 80)))?;

        let rows = [
            ("ID", Some(d.id.as_str())),
            ("Runtime", d.runtime.as_deref()),
            ("Genre", d.genre.as_deref()),
            ("Director", d.director.as_deref()),
            ("Cast", d.cast.as_deref()),
            ("IMDb", d.external_rating.as_deref()),
            ("Poster", Some(d.poster_url.as_str())),
        ];
        for (label, value) in rows {
            if let Some(value) = value {
                writeln!(f, "{:<10} {}", format!("{}:", label), value)?;
            }
        }
        writeln!(
            f,
            "{:<10} {}",
            "Favorite:",
            if d.is_favorite { "yes" } else { "no" }
        )?;
        writeln!(f, "{:<10} {}", "Rating:", star_glyphs(&d.stars.filled))?;

        if let Some(plot) = &d.plot {
            writeln!(f)?;
            writeln!(f, "{}", plot)?;
        }
        Ok(())
    }
}
