mod movie;
mod rating;

pub use movie::{Listing, MovieDetail, MovieId, MovieSummary};
pub use rating::{Rating, STAR_COUNT};

use std::collections::BTreeMap;

/// Favorite flag per movie, as persisted.
pub type FavoritesMap = BTreeMap<MovieId, bool>;

/// Star rating per movie, as persisted (0 = unrated).
pub type RatingsMap = BTreeMap<MovieId, Rating>;
