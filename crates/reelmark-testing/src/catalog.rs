use async_trait::async_trait;
use reelmark_omdb::{MetadataApi, SearchError};
use reelmark_types::{MovieDetail, MovieId, MovieSummary};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

/// A complete detail record for fixtures.
pub fn movie(id: &str, title: &str, year: &str) -> MovieDetail {
    MovieDetail {
        id: MovieId::from(id),
        title: title.to_string(),
        poster_url: Some(format!("https://img.example/{}.jpg", id)),
        year: Some(year.to_string()),
        runtime: Some("120 min".to_string()),
        genre: Some("Drama".to_string()),
        director: Some("Jane Doe".to_string()),
        cast: Some("A. Actor, B. Actor".to_string()),
        plot: Some(format!("The plot of {}.", title)),
        external_rating: Some("7.5".to_string()),
        is_successful: true,
    }
}

/// In-memory `MetadataApi` with call recording
///
/// Search matches titles case-insensitively by substring, in insertion order.
/// Ids marked with `failing` are still searchable but their detail fetch
/// returns an error; unknown ids yield an unsuccessful record.
#[derive(Default)]
pub struct StubCatalog {
    movies: Vec<MovieDetail>,
    failing: BTreeSet<MovieId>,
    offline: bool,
    searches: Mutex<Vec<String>>,
    details: Mutex<Vec<MovieId>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(mut self, detail: MovieDetail) -> Self {
        self.movies.push(detail);
        self
    }

    pub fn failing(mut self, id: &str) -> Self {
        self.failing.insert(MovieId::from(id));
        self
    }

    /// Every search fails with a network error.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.searches.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn detail_calls(&self) -> Vec<MovieId> {
        self.details.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Detail calls per id.
    pub fn detail_call_counts(&self) -> BTreeMap<MovieId, usize> {
        let mut counts = BTreeMap::new();
        for id in self.detail_calls() {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }
}

#[async_trait]
impl MetadataApi for StubCatalog {
    async fn search(&self, term: &str) -> Result<Vec<MovieSummary>, SearchError> {
        if let Ok(mut calls) = self.searches.lock() {
            calls.push(term.to_string());
        }
        if self.offline {
            return Err(SearchError::Network("stub catalog is offline".to_string()));
        }

        let needle = term.to_lowercase();
        let hits: Vec<MovieSummary> = self
            .movies
            .iter()
            .filter(|detail| detail.title.to_lowercase().contains(&needle))
            .map(MovieDetail::summary)
            .collect();

        if hits.is_empty() {
            return Err(SearchError::NotFound(Some("Movie not found!".to_string())));
        }
        Ok(hits)
    }

    async fn fetch_detail(&self, id: &MovieId) -> reelmark_omdb::Result<MovieDetail> {
        if let Ok(mut calls) = self.details.lock() {
            calls.push(id.clone());
        }
        if self.failing.contains(id) {
            let err = std::io::Error::other(format!("stub failure for {}", id));
            return Err(reelmark_omdb::Error::Json(serde_json::Error::io(err)));
        }

        Ok(self
            .movies
            .iter()
            .find(|detail| &detail.id == id)
            .cloned()
            .unwrap_or_else(|| MovieDetail::unsuccessful(id.clone())))
    }
}
