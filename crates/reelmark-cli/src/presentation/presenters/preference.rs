use reelmark_types::{MovieId, Rating};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PreferenceChangeViewModel, PreferenceKind, StatusBadge,
};

use super::movie::star_row;

pub fn present_favorite_toggled(
    id: &MovieId,
    is_favorite: bool,
    rating: Rating,
) -> CommandResultViewModel<PreferenceChangeViewModel> {
    let badge = if is_favorite {
        StatusBadge::success(format!("Added {} to favorites", id))
    } else {
        StatusBadge::info(format!("Removed {} from favorites", id))
    };

    CommandResultViewModel::new(PreferenceChangeViewModel {
        kind: PreferenceKind::Favorite,
        id: id.to_string(),
        is_favorite,
        stars: star_row(rating),
    })
    .with_badge(badge)
    .with_suggestion(Guidance::new("List favorites").with_command("reelmark favorites"))
}

pub fn present_rated(
    id: &MovieId,
    is_favorite: bool,
    rating: Rating,
) -> CommandResultViewModel<PreferenceChangeViewModel> {
    CommandResultViewModel::new(PreferenceChangeViewModel {
        kind: PreferenceKind::Rating,
        id: id.to_string(),
        is_favorite,
        stars: star_row(rating),
    })
    .with_badge(StatusBadge::success(format!("Rated {} {}", id, rating)))
}
