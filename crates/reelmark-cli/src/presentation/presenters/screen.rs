use reelmark_runtime::{NoticeLevel, PreferenceChange, UiState, View};
use reelmark_store::{KeyValueStore, PreferenceStore};

use crate::presentation::view_models::{
    NoticeViewModel, SearchBoxViewModel, StatusBarViewModel, StatusLevel, TabsViewModel,
    TuiScreenViewModel,
};

use super::movie::{patch_movie, present_detail, present_grid, star_row};

pub fn present_screen<S: KeyValueStore>(
    state: &UiState,
    preferences: &PreferenceStore<S>,
) -> TuiScreenViewModel {
    let term = match state.view {
        View::Search => Some(state.search_term.trim()).filter(|t| !t.is_empty()),
        View::Favorites => None,
    };
    // Notices are shown above the grid, not inside it
    let grid = present_grid(term, state.visible_grid(), None, preferences);

    let notice = present_notice(state);

    let modal = state.modal.as_ref().map(|detail| {
        present_detail(
            detail,
            preferences.is_favorite(&detail.id),
            preferences.rating(&detail.id),
        )
    });

    TuiScreenViewModel {
        tabs: TabsViewModel {
            active: state.view,
            favorites_count: preferences.favorite_ids().len(),
        },
        search_box: SearchBoxViewModel {
            term: state.search_term.clone(),
        },
        status_bar: StatusBarViewModel {
            view: state.view,
            card_count: grid.cards.len(),
            loading: state.is_loading(),
        },
        loading: state.is_loading(),
        grid,
        notice,
        modal,
    }
}

/// The notice of the visible section, if any.
pub fn present_notice(state: &UiState) -> Option<NoticeViewModel> {
    state.visible_notice().map(|notice| NoticeViewModel {
        level: match notice.level {
            NoticeLevel::Info => StatusLevel::Info,
            NoticeLevel::Error => StatusLevel::Error,
        },
        message: notice.message.clone(),
    })
}

/// Apply a preference change to an already presented screen.
pub fn patch_screen(screen: &mut TuiScreenViewModel, change: &PreferenceChange, favorites_count: usize) {
    patch_movie(&mut screen.grid.cards, change);

    if let Some(modal) = screen.modal.as_mut().filter(|modal| modal.id == change.id.as_str()) {
        modal.is_favorite = change.is_favorite;
        modal.stars = star_row(change.rating);
    }
    screen.tabs.favorites_count = favorites_count;
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelmark_runtime::Notice;
    use reelmark_store::MemoryStore;
    use reelmark_types::{Listing, MovieDetail, MovieId, MovieSummary, Rating};

    fn listing(id: &str) -> Listing {
        Listing::new(
            MovieSummary {
                id: MovieId::from(id),
                title: id.to_string(),
                poster_url: None,
                year: None,
            },
            None,
        )
    }

    #[test]
    fn test_screen_shows_visible_grid_and_notice() {
        let preferences = PreferenceStore::open(MemoryStore::new());
        let state = UiState {
            view: View::Favorites,
            search_grid: vec![listing("tt1"), listing("tt2")],
            favorites_notice: Some(Notice::info("No favorite movies yet!")),
            ..UiState::default()
        };

        let screen = present_screen(&state, &preferences);
        assert!(screen.grid.cards.is_empty());
        assert_eq!(
            screen.notice,
            Some(NoticeViewModel {
                level: StatusLevel::Info,
                message: "No favorite movies yet!".to_string()
            })
        );
        assert_eq!(screen.tabs.active, View::Favorites);
    }

    #[test]
    fn test_patch_screen_updates_grid_and_modal() {
        let preferences = PreferenceStore::open(MemoryStore::new());
        let id = MovieId::from("tt1");
        let mut detail = MovieDetail::unsuccessful(id.clone());
        detail.is_successful = true;
        let state = UiState {
            search_term: "tt".to_string(),
            search_grid: vec![listing("tt1"), listing("tt2")],
            modal: Some(detail),
            ..UiState::default()
        };
        let mut screen = present_screen(&state, &preferences);

        let change = PreferenceChange {
            id,
            is_favorite: true,
            rating: Rating::new(5).unwrap(),
            surfaces: vec![],
        };
        patch_screen(&mut screen, &change, 1);

        assert!(screen.grid.cards[0].is_favorite);
        assert!(!screen.grid.cards[1].is_favorite);
        let modal = screen.modal.unwrap();
        assert!(modal.is_favorite);
        assert_eq!(modal.stars.filled, vec![true; 5]);
        assert_eq!(screen.tabs.favorites_count, 1);
    }
}
