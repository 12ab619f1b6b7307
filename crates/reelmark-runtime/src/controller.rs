//! Interaction controller
//!
//! Owns the preference store and the UI state. Every user action is a
//! synchronous method that mutates state and may return an [`Effect`]; the
//! caller performs the effect and hands the [`Completion`] back through
//! [`Controller::complete`]. Completions carrying a superseded [`Ticket`] are
//! dropped.

use reelmark_omdb::SearchError;
use reelmark_store::{KeyValueStore, PreferenceStore};
use reelmark_types::{MovieId, Rating, normalize_term};
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::tasks::{Completion, Effect};
use crate::ui::{Generation, Notice, Surface, UiState, View};

pub const NO_FAVORITES_MESSAGE: &str = "No favorite movies yet!";
pub const DETAIL_ERROR_MESSAGE: &str = "Error loading movie details";

/// Summary of a favorites reload where some details failed.
pub fn favorites_loaded_message(loaded: usize, requested: usize) -> String {
    format!("{} of {} favorites loaded", loaded, requested)
}

/// Outcome of a favorite toggle or rating, with every surface to repaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceChange {
    pub id: MovieId,
    pub is_favorite: bool,
    pub rating: Rating,
    pub surfaces: Vec<Surface>,
}

pub struct Controller<S: KeyValueStore> {
    preferences: PreferenceStore<S>,
    state: UiState,
    debouncer: Debouncer<String>,
    searches: Generation,
    favorite_loads: Generation,
    detail_loads: Generation,
}

impl<S: KeyValueStore> Controller<S> {
    pub fn new(preferences: PreferenceStore<S>, debounce: Duration) -> Self {
        Self {
            preferences,
            state: UiState::default(),
            debouncer: Debouncer::new(debounce),
            searches: Generation::default(),
            favorite_loads: Generation::default(),
            detail_loads: Generation::default(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    pub fn is_favorite(&self, id: &MovieId) -> bool {
        self.preferences.is_favorite(id)
    }

    pub fn rating(&self, id: &MovieId) -> Rating {
        self.preferences.rating(id)
    }

    // --- search ---

    /// The search box now reads `term`.
    ///
    /// A blank term clears the grid at once; anything else (re)starts the
    /// debounce window.
    pub fn edit_query(&mut self, term: impl Into<String>, now: Instant) {
        let term = term.into();
        self.state.search_term = term.clone();

        if normalize_term(&term).is_none() {
            self.clear_search();
            return;
        }
        self.debouncer.push(term, now);
    }

    /// Issue the debounced search if its quiet period has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<Effect> {
        let term = self.debouncer.fire(now)?;
        self.issue_search(&term)
    }

    /// When `tick` next needs to run.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Search for the current term now, skipping the debounce.
    pub fn submit(&mut self) -> Option<Effect> {
        self.debouncer.cancel();
        let term = self.state.search_term.clone();
        self.issue_search(&term)
    }

    fn issue_search(&mut self, term: &str) -> Option<Effect> {
        let Some(term) = normalize_term(term) else {
            self.clear_search();
            return None;
        };

        let ticket = self.searches.issue();
        self.state.search_loading = true;
        self.state.notice = None;
        tracing::debug!(term, "search issued");

        Some(Effect::Search {
            ticket,
            term: term.to_string(),
        })
    }

    fn clear_search(&mut self) {
        self.debouncer.cancel();
        self.searches.invalidate();
        self.state.search_grid.clear();
        self.state.search_loading = false;
        self.state.notice = None;
    }

    // --- views ---

    pub fn show_search(&mut self) {
        self.state.view = View::Search;
    }

    /// Switch to the favorites view and reload it from the stored flags.
    pub fn show_favorites(&mut self) -> Option<Effect> {
        self.state.view = View::Favorites;
        self.state.favorites_notice = None;

        let ids = self.preferences.favorite_ids();
        if ids.is_empty() {
            self.favorite_loads.invalidate();
            self.state.favorites_grid.clear();
            self.state.favorites_loading = false;
            self.state.favorites_notice = Some(Notice::info(NO_FAVORITES_MESSAGE));
            return None;
        }

        let ticket = self.favorite_loads.issue();
        self.state.favorites_loading = true;
        tracing::debug!(count = ids.len(), "favorites reload issued");
        Some(Effect::LoadFavorites { ticket, ids })
    }

    pub fn switch_view(&mut self) -> Option<Effect> {
        match self.state.view.toggled() {
            View::Search => {
                self.show_search();
                None
            }
            View::Favorites => self.show_favorites(),
        }
    }

    // --- detail modal ---

    pub fn open_detail(&mut self, id: &MovieId) -> Option<Effect> {
        let ticket = self.detail_loads.issue();
        Some(Effect::LoadDetail {
            ticket,
            id: id.clone(),
        })
    }

    pub fn close_detail(&mut self) {
        self.detail_loads.invalidate();
        self.state.modal = None;
    }

    /// Clear the notice of the visible section.
    pub fn dismiss_notice(&mut self) {
        *self.state.visible_notice_mut() = None;
    }

    /// Store and detail failures belong to whichever section is on screen.
    fn raise(&mut self, notice: Notice) {
        *self.state.visible_notice_mut() = Some(notice);
    }

    // --- preferences ---

    /// Flip the favorite flag of `id`.
    ///
    /// A failed write leaves the in-memory flag flipped and raises a notice.
    pub fn toggle_favorite(&mut self, id: &MovieId) -> PreferenceChange {
        if let Err(err) = self.preferences.toggle_favorite(id) {
            tracing::error!(id = %id, error = %err, "failed to persist favorites");
            self.raise(Notice::error(format!("Could not save favorites: {}", err)));
        }
        self.change_for(id)
    }

    /// Rate `id` with `stars` (1..=5). `None` if `stars` is out of range.
    pub fn rate(&mut self, id: &MovieId, stars: u8) -> Option<PreferenceChange> {
        match self.preferences.set_rating(id, stars) {
            Ok(_) => {}
            Err(reelmark_store::Error::Rating(err)) => {
                tracing::warn!(id = %id, error = %err, "rating rejected");
                return None;
            }
            Err(err) => {
                tracing::error!(id = %id, error = %err, "failed to persist ratings");
                self.raise(Notice::error(format!("Could not save rating: {}", err)));
            }
        }
        Some(self.change_for(id))
    }

    /// Every mounted surface that currently shows `id`.
    pub fn mounted_surfaces(&self, id: &MovieId) -> Vec<Surface> {
        self.state.surfaces_showing(id)
    }

    fn change_for(&self, id: &MovieId) -> PreferenceChange {
        PreferenceChange {
            id: id.clone(),
            is_favorite: self.preferences.is_favorite(id),
            rating: self.preferences.rating(id),
            surfaces: self.mounted_surfaces(id),
        }
    }

    // --- completions ---

    /// Apply a finished effect. Returns `false` if it was superseded.
    pub fn complete(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Search {
                ticket,
                term,
                outcome,
            } => {
                if !self.searches.is_current(ticket) {
                    tracing::debug!(term = %term, "dropping superseded search");
                    return false;
                }
                self.state.search_loading = false;
                match outcome {
                    Ok(listings) if listings.is_empty() => {
                        self.state.search_grid.clear();
                        self.state.notice = Some(Notice::info(SearchError::NOT_FOUND_FALLBACK));
                    }
                    Ok(listings) => {
                        self.state.search_grid = listings;
                        self.state.notice = None;
                    }
                    Err(err) => {
                        self.state.search_grid.clear();
                        self.state.notice = Some(match err {
                            SearchError::NotFound(_) => Notice::info(err.user_message()),
                            SearchError::Network(_) => Notice::error(err.user_message()),
                        });
                    }
                }
            }
            Completion::Favorites {
                ticket,
                requested,
                listings,
            } => {
                if !self.favorite_loads.is_current(ticket) {
                    tracing::debug!("dropping superseded favorites load");
                    return false;
                }
                self.state.favorites_loading = false;
                if listings.is_empty() && requested > 0 {
                    self.state.favorites_notice =
                        Some(Notice::error(favorites_loaded_message(0, requested)));
                }
                self.state.favorites_grid = listings;
            }
            Completion::Detail { ticket, id, detail } => {
                if !self.detail_loads.is_current(ticket) {
                    tracing::debug!(id = %id, "dropping superseded detail load");
                    return false;
                }
                match detail {
                    Some(detail) => self.state.modal = Some(detail),
                    None => self.raise(Notice::error(DETAIL_ERROR_MESSAGE)),
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelmark_store::MemoryStore;
    use reelmark_types::{Listing, MovieDetail, MovieSummary};

    const DELAY: Duration = Duration::from_millis(500);

    fn controller() -> Controller<MemoryStore> {
        Controller::new(PreferenceStore::open(MemoryStore::new()), DELAY)
    }

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

    fn search_ticket(effect: Option<Effect>) -> crate::ui::Ticket {
        match effect {
            Some(Effect::Search { ticket, .. }) => ticket,
            other => panic!("expected a search effect, got {:?}", other),
        }
    }

    #[test]
    fn test_keystroke_burst_issues_one_search_for_final_term() {
        let mut controller = controller();
        let start = Instant::now();

        let mut effects = Vec::new();
        for (i, term) in ["m", "ma", "mat", "matr", "matri"].into_iter().enumerate() {
            let now = start + Duration::from_millis(50 * i as u64);
            effects.extend(controller.tick(now));
            controller.edit_query(term, now);
        }
        effects.extend(controller.tick(start + Duration::from_millis(200) + DELAY));

        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::Search { term, .. } if term == "matri"));
        assert!(controller.state().search_loading);
    }

    #[test]
    fn test_blank_term_clears_grid_and_cancels_pending_search() {
        let mut controller = controller();
        let start = Instant::now();

        controller.edit_query("alien", start);
        let ticket = search_ticket(controller.submit());
        controller.complete(Completion::Search {
            ticket,
            term: "alien".to_string(),
            outcome: Ok(vec![listing("tt1")]),
        });
        assert_eq!(controller.state().search_grid.len(), 1);

        controller.edit_query("alie", start);
        controller.edit_query("   ", start);

        assert!(controller.state().search_grid.is_empty());
        assert_eq!(controller.next_deadline(), None);
        assert_eq!(controller.tick(start + DELAY), None);
        assert_eq!(controller.submit(), None);
    }

    #[test]
    fn test_clearing_term_drops_in_flight_search() {
        let mut controller = controller();
        controller.edit_query("alien", Instant::now());
        let ticket = search_ticket(controller.submit());

        controller.edit_query("", Instant::now());
        let applied = controller.complete(Completion::Search {
            ticket,
            term: "alien".to_string(),
            outcome: Ok(vec![listing("tt1")]),
        });

        assert!(!applied);
        assert!(controller.state().search_grid.is_empty());
        assert!(!controller.state().search_loading);
    }

    #[test]
    fn test_latest_search_wins() {
        let mut controller = controller();
        controller.edit_query("alien", Instant::now());
        let first = search_ticket(controller.submit());
        controller.edit_query("aliens", Instant::now());
        let second = search_ticket(controller.submit());

        assert!(controller.complete(Completion::Search {
            ticket: second,
            term: "aliens".to_string(),
            outcome: Ok(vec![listing("tt2")]),
        }));
        assert!(!controller.complete(Completion::Search {
            ticket: first,
            term: "alien".to_string(),
            outcome: Ok(vec![listing("tt1")]),
        }));

        assert_eq!(controller.state().search_grid[0].id().as_str(), "tt2");
    }

    #[test]
    fn test_search_errors_become_notices() {
        let mut controller = controller();
        controller.edit_query("zzzz", Instant::now());
        let ticket = search_ticket(controller.submit());
        controller.complete(Completion::Search {
            ticket,
            term: "zzzz".to_string(),
            outcome: Err(SearchError::NotFound(None)),
        });
        assert_eq!(controller.state().notice, Some(Notice::info("No films found")));
        assert!(!controller.state().search_loading);

        let ticket = search_ticket(controller.submit());
        assert_eq!(controller.state().notice, None);
        controller.complete(Completion::Search {
            ticket,
            term: "zzzz".to_string(),
            outcome: Err(SearchError::Network("timeout".to_string())),
        });
        assert_eq!(
            controller.state().notice,
            Some(Notice::error("An error occurred while searching for films"))
        );
    }

    #[test]
    fn test_empty_favorites_issue_nothing() {
        let mut controller = controller();
        assert_eq!(controller.show_favorites(), None);
        assert_eq!(controller.state().view, View::Favorites);
        assert_eq!(
            controller.state().favorites_notice,
            Some(Notice::info("No favorite movies yet!"))
        );
    }

    #[test]
    fn test_favorites_reload_requests_only_set_flags() {
        let backend = MemoryStore::new()
            .with_entry("favorites", r#"{"tt001":true,"tt002":false}"#);
        let mut controller = Controller::new(PreferenceStore::open(backend), DELAY);

        match controller.show_favorites() {
            Some(Effect::LoadFavorites { ids, .. }) => {
                assert_eq!(ids, vec![MovieId::from("tt001")]);
            }
            other => panic!("expected a favorites load, got {:?}", other),
        }
        assert!(controller.state().favorites_loading);
    }

    #[test]
    fn test_toggle_reports_every_mounted_surface() {
        let mut controller = controller();
        controller.edit_query("alien", Instant::now());
        let ticket = search_ticket(controller.submit());
        controller.complete(Completion::Search {
            ticket,
            term: "alien".to_string(),
            outcome: Ok(vec![listing("tt1"), listing("tt2")]),
        });

        let id = MovieId::from("tt1");
        let change = controller.toggle_favorite(&id);
        assert!(change.is_favorite);
        assert_eq!(change.surfaces, vec![Surface::SearchGrid]);

        let change = controller.toggle_favorite(&id);
        assert!(!change.is_favorite);
        assert_eq!(controller.preferences().backend().get("favorites").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_failed_favorites_reload_raises_notice() {
        let backend = MemoryStore::new().with_entry("favorites", r#"{"tt001":true,"tt002":true}"#);
        let mut controller = Controller::new(PreferenceStore::open(backend), DELAY);

        let Some(Effect::LoadFavorites { ticket, ids }) = controller.show_favorites() else {
            panic!("expected a favorites load");
        };
        assert!(controller.complete(Completion::Favorites {
            ticket,
            requested: ids.len(),
            listings: vec![],
        }));

        assert!(controller.state().favorites_grid.is_empty());
        assert_eq!(
            controller.state().visible_notice(),
            Some(&Notice::error("0 of 2 favorites loaded"))
        );
    }

    #[test]
    fn test_notices_follow_the_visible_section() {
        let mut controller = controller();
        controller.edit_query("zzzz", Instant::now());
        let ticket = search_ticket(controller.submit());
        controller.complete(Completion::Search {
            ticket,
            term: "zzzz".to_string(),
            outcome: Err(SearchError::NotFound(None)),
        });

        controller.toggle_favorite(&MovieId::from("tt1"));
        let Some(Effect::LoadFavorites { ticket, ids }) = controller.show_favorites() else {
            panic!("expected a favorites load");
        };
        controller.complete(Completion::Favorites {
            ticket,
            requested: ids.len(),
            listings: vec![listing("tt1")],
        });
        assert_eq!(controller.state().visible_notice(), None);

        let Some(Effect::LoadDetail { ticket, id }) = controller.open_detail(&MovieId::from("tt1"))
        else {
            panic!("expected a detail load");
        };
        controller.complete(Completion::Detail { ticket, id, detail: None });
        assert_eq!(
            controller.state().favorites_notice,
            Some(Notice::error("Error loading movie details"))
        );

        controller.dismiss_notice();
        assert_eq!(controller.state().visible_notice(), None);
        controller.show_search();
        assert_eq!(controller.state().notice, Some(Notice::info("No films found")));
    }

    #[test]
    fn test_rate_updates_immediately_and_rejects_out_of_range() {
        let mut controller = controller();
        let id = MovieId::from("tt1");

        let change = controller.rate(&id, 4).unwrap();
        assert_eq!(change.rating.stars(), 4);
        assert!(change.surfaces.is_empty());
        assert_eq!(controller.rating(&id).stars(), 4);

        assert_eq!(controller.rate(&id, 0), None);
        assert_eq!(controller.rate(&id, 6), None);
        assert_eq!(controller.rating(&id).stars(), 4);
    }

    #[test]
    fn test_detail_failure_and_stale_detail() {
        let mut controller = controller();
        let id = MovieId::from("tt1");

        let Some(Effect::LoadDetail { ticket, .. }) = controller.open_detail(&id) else {
            panic!("expected a detail load");
        };
        controller.complete(Completion::Detail {
            ticket,
            id: id.clone(),
            detail: None,
        });
        assert_eq!(controller.state().modal, None);
        assert_eq!(controller.state().notice, Some(Notice::error("Error loading movie details")));

        let Some(Effect::LoadDetail { ticket, .. }) = controller.open_detail(&id) else {
            panic!("expected a detail load");
        };
        controller.close_detail();
        let mut detail = MovieDetail::unsuccessful(id.clone());
        detail.is_successful = true;
        assert!(!controller.complete(Completion::Detail {
            ticket,
            id,
            detail: Some(detail),
        }));
        assert_eq!(controller.state().modal, None);
    }
}
