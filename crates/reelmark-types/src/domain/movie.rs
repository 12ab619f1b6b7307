use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// External movie identifier (IMDb id as issued by the metadata API, e.g. `tt0111161`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MovieId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Minimal movie record returned by a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    /// `None` when the upstream service has no poster for this title
    pub poster_url: Option<String>,
    pub year: Option<String>,
}

/// Full movie record returned by an id-based query
///
/// `is_successful` mirrors the upstream success flag. An unsuccessful record
/// carries only the requested id and must be treated as "unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: MovieId,
    pub title: String,
    pub poster_url: Option<String>,
    pub year: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub plot: Option<String>,
    /// Rating from the external service, e.g. "9.3" (out of 10)
    pub external_rating: Option<String>,
    pub is_successful: bool,
}

impl MovieDetail {
    /// Failure record for `id`: every field empty, `is_successful = false`.
    pub fn unsuccessful(id: MovieId) -> Self {
        Self {
            id,
            title: String::new(),
            poster_url: None,
            year: None,
            runtime: None,
            genre: None,
            director: None,
            cast: None,
            plot: None,
            external_rating: None,
            is_successful: false,
        }
    }

    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            poster_url: self.poster_url.clone(),
            year: self.year.clone(),
        }
    }
}

/// One entry of a results grid.
///
/// `detail` is `None` when the per-item detail fetch failed; the card is then
/// rendered from the summary alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub summary: MovieSummary,
    pub detail: Option<MovieDetail>,
}

impl Listing {
    pub fn new(summary: MovieSummary, detail: Option<MovieDetail>) -> Self {
        Self { summary, detail }
    }

    /// Listing built from a successful detail record.
    pub fn from_detail(detail: MovieDetail) -> Self {
        Self {
            summary: detail.summary(),
            detail: Some(detail),
        }
    }

    pub fn id(&self) -> &MovieId {
        &self.summary.id
    }

    pub fn is_degraded(&self) -> bool {
        self.detail.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_movie_id_serializes_as_plain_string_key() {
        let mut map = BTreeMap::new();
        map.insert(MovieId::from("tt001"), true);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"tt001":true}"#);

        let back: BTreeMap<MovieId, bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("tt001"), Some(&true));
    }

    #[test]
    fn test_listing_from_detail_copies_summary_fields() {
        let detail = MovieDetail {
            title: "Heat".to_string(),
            year: Some("1995".to_string()),
            poster_url: Some("https://img/heat.jpg".to_string()),
            is_successful: true,
            ..MovieDetail::unsuccessful(MovieId::from("tt0113277"))
        };

        let listing = Listing::from_detail(detail);
        assert_eq!(listing.id().as_str(), "tt0113277");
        assert_eq!(listing.summary.title, "Heat");
        assert_eq!(listing.summary.year.as_deref(), Some("1995"));
        assert!(!listing.is_degraded());
    }
}
