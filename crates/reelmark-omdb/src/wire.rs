//! OMDb response shapes and their mapping onto domain records.
//!
//! Every response carries `"Response": "True" | "False"`; failures add an
//! `"Error"` message. Absent values are sent as the string `"N/A"`.

use reelmark_types::{MovieDetail, MovieId, MovieSummary, available};
use serde::Deserialize;

use crate::traits::SearchError;

const SUCCESS_FLAG: &str = "True";

#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchHit>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailEnvelope {
    pub response: String,
    pub error: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
}

impl SearchHit {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: MovieId::from(self.imdb_id),
            title: self.title,
            poster_url: available(self.poster),
            year: available(self.year),
        }
    }
}

impl DetailEnvelope {
    pub fn is_successful(&self) -> bool {
        self.response == SUCCESS_FLAG
    }

    /// Map onto a detail record for `requested`.
    ///
    /// An unsuccessful envelope yields a failure record for the requested id.
    pub fn into_detail(self, requested: &MovieId) -> MovieDetail {
        if !self.is_successful() {
            return MovieDetail::unsuccessful(requested.clone());
        }

        MovieDetail {
            id: self
                .imdb_id
                .map(MovieId::from)
                .unwrap_or_else(|| requested.clone()),
            title: self.title.unwrap_or_default(),
            poster_url: available(self.poster),
            year: available(self.year),
            runtime: available(self.runtime),
            genre: available(self.genre),
            director: available(self.director),
            cast: available(self.actors),
            plot: available(self.plot),
            external_rating: available(self.imdb_rating),
            is_successful: true,
        }
    }
}

/// Decode a search response body.
pub fn parse_search(body: &str) -> Result<Vec<MovieSummary>, SearchError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)
        .map_err(|err| SearchError::Network(format!("malformed search response: {}", err)))?;

    if envelope.response != SUCCESS_FLAG {
        return Err(SearchError::NotFound(available(envelope.error)));
    }

    Ok(envelope
        .search
        .into_iter()
        .map(SearchHit::into_summary)
        .collect())
}

/// Decode a detail response body for `requested`.
pub fn parse_detail(requested: &MovieId, body: &str) -> crate::Result<MovieDetail> {
    let envelope: DetailEnvelope = serde_json::from_str(body)?;
    if !envelope.is_successful() {
        tracing::debug!(
            id = %requested,
            error = envelope.error.as_deref().unwrap_or("unknown"),
            "detail lookup unsuccessful"
        );
    }
    Ok(envelope.into_detail(requested))
}
