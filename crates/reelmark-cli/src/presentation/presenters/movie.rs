use reelmark_runtime::{Notice, NoticeLevel, PreferenceChange, favorites_loaded_message};
use reelmark_store::{KeyValueStore, PreferenceStore};
use reelmark_types::{Listing, MovieDetail, Rating, STAR_COUNT};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, MovieCardViewModel, MovieDetailViewModel,
    MovieGridViewModel, StarRowViewModel, StatusBadge,
};

/// Stand-in image shown when a movie has no poster
pub const PLACEHOLDER_POSTER_URL: &str =
    "https://via.placeholder.com/300x450?text=No+Poster+Available";

pub fn poster_or_placeholder(poster_url: Option<&str>) -> String {
    poster_url.unwrap_or(PLACEHOLDER_POSTER_URL).to_string()
}

/// Indicator `i` (1-based) is filled iff `i <= rating`.
pub fn star_row(rating: Rating) -> StarRowViewModel {
    StarRowViewModel {
        rating: rating.stars(),
        filled: (1..=STAR_COUNT).map(|i| rating.is_filled(i)).collect(),
    }
}

pub fn present_card(listing: &Listing, is_favorite: bool, rating: Rating) -> MovieCardViewModel {
    let summary = &listing.summary;
    let detail = listing.detail.as_ref();

    MovieCardViewModel {
        id: summary.id.to_string(),
        title: summary.title.clone(),
        year: summary.year.clone(),
        poster_url: poster_or_placeholder(summary.poster_url.as_deref()),
        genre: detail.and_then(|d| d.genre.clone()),
        director: detail.and_then(|d| d.director.clone()),
        runtime: detail.and_then(|d| d.runtime.clone()),
        external_rating: detail.and_then(|d| d.external_rating.clone()),
        is_favorite,
        stars: star_row(rating),
        degraded: listing.is_degraded(),
    }
}

pub fn present_detail(detail: &MovieDetail, is_favorite: bool, rating: Rating) -> MovieDetailViewModel {
    MovieDetailViewModel {
        id: detail.id.to_string(),
        title: detail.title.clone(),
        year: detail.year.clone(),
        poster_url: poster_or_placeholder(detail.poster_url.as_deref()),
        runtime: detail.runtime.clone(),
        genre: detail.genre.clone(),
        director: detail.director.clone(),
        cast: detail.cast.clone(),
        plot: detail.plot.clone(),
        external_rating: detail.external_rating.clone(),
        is_favorite,
        stars: star_row(rating),
    }
}

/// One-shot `show`: the full record plus what can be done with it.
pub fn present_show(
    detail: &MovieDetail,
    is_favorite: bool,
    rating: Rating,
) -> CommandResultViewModel<MovieDetailViewModel> {
    let id = detail.id.as_str();
    let toggle = if is_favorite { "Unfavorite" } else { "Favorite" };
    CommandResultViewModel::new(present_detail(detail, is_favorite, rating))
        .with_suggestion(Guidance::new(toggle).with_command(format!("reelmark favorite {}", id)))
        .with_suggestion(Guidance::new("Rate").with_command(format!("reelmark rate {} <1-5>", id)))
}

pub fn present_grid<S: KeyValueStore>(
    term: Option<&str>,
    listings: &[Listing],
    notice: Option<&Notice>,
    preferences: &PreferenceStore<S>,
) -> MovieGridViewModel {
    MovieGridViewModel {
        term: term.map(str::to_string),
        cards: listings
            .iter()
            .map(|listing| {
                let id = listing.id();
                present_card(listing, preferences.is_favorite(id), preferences.rating(id))
            })
            .collect(),
        notice: notice.map(|notice| notice.message.clone()),
    }
}

pub fn present_search_result<S: KeyValueStore>(
    term: &str,
    listings: &[Listing],
    notice: Option<&Notice>,
    preferences: &PreferenceStore<S>,
) -> CommandResultViewModel<MovieGridViewModel> {
    let grid = present_grid(Some(term), listings, notice, preferences);
    let degraded = grid.cards.iter().filter(|card| card.degraded).count();

    let badge = match notice {
        Some(notice) if notice.level == NoticeLevel::Error => StatusBadge::error(&notice.message),
        Some(notice) => StatusBadge::warning(&notice.message),
        None if degraded > 0 => StatusBadge::warning(format!(
            "Found {} film(s), {} without details",
            grid.cards.len(),
            degraded
        )),
        None => StatusBadge::success(format!("Found {} film(s)", grid.cards.len())),
    };

    let mut result = CommandResultViewModel::new(grid).with_badge(badge);
    if notice.is_none() {
        result = result.with_suggestion(
            Guidance::new("Show full details").with_command("reelmark show <ID>"),
        );
    }
    result
}

pub fn present_favorites<S: KeyValueStore>(
    listings: &[Listing],
    notice: Option<&Notice>,
    preferences: &PreferenceStore<S>,
) -> CommandResultViewModel<MovieGridViewModel> {
    let grid = present_grid(None, listings, notice, preferences);
    let requested = preferences.favorite_ids().len();

    if requested == 0 {
        return CommandResultViewModel::new(grid)
            .with_suggestion(Guidance::new("Mark a movie").with_command("reelmark favorite <ID>"));
    }

    let badge = if grid.cards.len() < requested {
        StatusBadge::warning(favorites_loaded_message(grid.cards.len(), requested))
    } else {
        StatusBadge::success(format!("{} favorite(s)", grid.cards.len()))
    };
    CommandResultViewModel::new(grid).with_badge(badge)
}

/// Repaint every card showing the changed movie. Returns how many matched.
pub fn patch_movie(cards: &mut [MovieCardViewModel], change: &PreferenceChange) -> usize {
    let id = change.id.as_str();
    let mut patched = 0;
    for card in cards.iter_mut().filter(|card| card.id == id) {
        card.is_favorite = change.is_favorite;
        card.stars = star_row(change.rating);
        patched += 1;
    }
    patched
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelmark_store::MemoryStore;
    use reelmark_types::{MovieId, MovieSummary};

    fn listing(id: &str, poster: Option<&str>, with_detail: bool) -> Listing {
        let summary = MovieSummary {
            id: MovieId::from(id),
            title: format!("Movie {}", id),
            poster_url: poster.map(str::to_string),
            year: Some("1999".to_string()),
        };
        let detail = with_detail.then(|| MovieDetail {
            genre: Some("Sci-Fi".to_string()),
            is_successful: true,
            title: summary.title.clone(),
            ..MovieDetail::unsuccessful(summary.id.clone())
        });
        Listing::new(summary, detail)
    }

    #[test]
    fn test_star_row_fills_up_to_rating() {
        for stars in 0..=5u8 {
            let row = star_row(Rating::new(stars).unwrap());
            assert_eq!(row.filled.len(), 5);
            assert_eq!(row.filled.iter().filter(|f| **f).count(), stars as usize);
            assert!(row.filled.iter().take(stars as usize).all(|f| *f));
        }
    }

    #[test]
    fn test_missing_poster_uses_placeholder() {
        let card = present_card(&listing("tt1", None, true), false, Rating::UNRATED);
        assert_eq!(
            card.poster_url,
            "https://via.placeholder.com/300x450?text=No+Poster+Available"
        );

        let card = present_card(&listing("tt1", Some("https://img/x.jpg"), true), false, Rating::UNRATED);
        assert_eq!(card.poster_url, "https://img/x.jpg");
    }

    #[test]
    fn test_degraded_card_keeps_summary_fields() {
        let card = present_card(&listing("tt1", None, false), true, Rating::UNRATED);
        assert!(card.degraded);
        assert!(card.is_favorite);
        assert_eq!(card.title, "Movie tt1");
        assert_eq!(card.genre, None);
    }

    #[test]
    fn test_grid_reads_preferences() {
        let backend = MemoryStore::new()
            .with_entry("favorites", r#"{"tt2":true}"#)
            .with_entry("ratings", r#"{"tt1":4}"#);
        let preferences = PreferenceStore::open(backend);
        let listings = vec![listing("tt1", None, true), listing("tt2", None, true)];

        let grid = present_grid(Some("movie"), &listings, None, &preferences);
        assert_eq!(grid.cards[0].stars.rating, 4);
        assert!(!grid.cards[0].is_favorite);
        assert!(grid.cards[1].is_favorite);
    }

    #[test]
    fn test_patch_movie_touches_only_matching_cards() {
        let listings = vec![listing("tt1", None, true), listing("tt2", None, true), listing("tt1", None, false)];
        let mut cards: Vec<_> = listings
            .iter()
            .map(|l| present_card(l, false, Rating::UNRATED))
            .collect();

        let change = PreferenceChange {
            id: MovieId::from("tt1"),
            is_favorite: true,
            rating: Rating::new(3).unwrap(),
            surfaces: vec![],
        };
        assert_eq!(patch_movie(&mut cards, &change), 2);
        assert!(cards[0].is_favorite && cards[2].is_favorite);
        assert_eq!(cards[0].stars.rating, 3);
        assert!(!cards[1].is_favorite);
        assert_eq!(cards[1].stars.rating, 0);
    }
}
