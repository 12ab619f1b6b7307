use reelmark_omdb::{MetadataApi, SearchError, fetch_details, search_listings};
use reelmark_store::KeyValueStore;
use reelmark_types::{Listing, MovieDetail, MovieId};

use crate::controller::Controller;
use crate::ui::Ticket;

/// Network work requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search { ticket: Ticket, term: String },
    LoadFavorites { ticket: Ticket, ids: Vec<MovieId> },
    LoadDetail { ticket: Ticket, id: MovieId },
}

/// Result of an `Effect`, fed back through `Controller::complete`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Search {
        ticket: Ticket,
        term: String,
        outcome: Result<Vec<Listing>, SearchError>,
    },
    Favorites {
        ticket: Ticket,
        /// How many favorites were asked for
        requested: usize,
        listings: Vec<Listing>,
    },
    Detail {
        ticket: Ticket,
        id: MovieId,
        detail: Option<MovieDetail>,
    },
}

/// Execute one effect against the metadata API.
pub async fn perform<A>(api: &A, effect: Effect) -> Completion
where
    A: MetadataApi + ?Sized,
{
    match effect {
        Effect::Search { ticket, term } => {
            let outcome = search_listings(api, &term).await;
            if let Err(err) = &outcome {
                tracing::info!(term = %term, error = %err, "search produced no grid");
            }
            Completion::Search {
                ticket,
                term,
                outcome,
            }
        }
        Effect::LoadFavorites { ticket, ids } => {
            // Failed entries are omitted from the favorites grid
            let requested = ids.len();
            let listings = fetch_details(api, &ids)
                .await
                .into_iter()
                .flatten()
                .map(Listing::from_detail)
                .collect();
            Completion::Favorites {
                ticket,
                requested,
                listings,
            }
        }
        Effect::LoadDetail { ticket, id } => {
            let detail = match api.fetch_detail(&id).await {
                Ok(detail) if detail.is_successful => Some(detail),
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "detail fetch failed");
                    None
                }
            };
            Completion::Detail { ticket, id, detail }
        }
    }
}

/// Perform `effect` (if any) and apply its completion in place.
///
/// For callers without an event loop: one-shot commands and tests.
pub async fn run_to_completion<S, A>(
    controller: &mut Controller<S>,
    api: &A,
    effect: Option<Effect>,
) -> bool
where
    S: KeyValueStore,
    A: MetadataApi + ?Sized,
{
    match effect {
        Some(effect) => {
            let completion = perform(api, effect).await;
            controller.complete(completion)
        }
        None => false,
    }
}
