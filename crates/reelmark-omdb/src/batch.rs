use futures::future::join_all;
use reelmark_types::{Listing, MovieDetail, MovieId};

use crate::traits::{MetadataApi, SearchError};

/// Fetch details for every id concurrently and wait for all of them.
///
/// The result is in input order. A transport failure or an unsuccessful
/// upstream answer leaves `None` at that position; the rest of the batch is
/// unaffected.
pub async fn fetch_details<A>(api: &A, ids: &[MovieId]) -> Vec<Option<MovieDetail>>
where
    A: MetadataApi + ?Sized,
{
    let fetches = ids.iter().map(|id| async move {
        match api.fetch_detail(id).await {
            Ok(detail) if detail.is_successful => Some(detail),
            Ok(_) => {
                tracing::warn!(id = %id, "detail unavailable upstream");
                None
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "detail fetch failed");
                None
            }
        }
    });

    join_all(fetches).await
}

/// Resolve one page of search results: the summary query, then every
/// per-item detail in one concurrent batch.
pub async fn search_listings<A>(api: &A, term: &str) -> Result<Vec<Listing>, SearchError>
where
    A: MetadataApi + ?Sized,
{
    let summaries = api.search(term).await?;
    let ids: Vec<MovieId> = summaries.iter().map(|s| s.id.clone()).collect();
    let details = fetch_details(api, &ids).await;

    Ok(summaries
        .into_iter()
        .zip(details)
        .map(|(summary, detail)| Listing::new(summary, detail))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reelmark_types::MovieSummary;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Answers ids listed in `fail` with an error, others after a delay that
    /// shrinks with position, so completion order is the reverse of input order.
    struct SlowCatalog {
        fail: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MetadataApi for SlowCatalog {
        async fn search(&self, _term: &str) -> Result<Vec<MovieSummary>, SearchError> {
            Ok(["tt1", "tt2", "tt3"]
                .iter()
                .map(|id| MovieSummary {
                    id: MovieId::from(*id),
                    title: format!("Movie {}", id),
                    poster_url: None,
                    year: None,
                })
                .collect())
        }

        async fn fetch_detail(&self, id: &MovieId) -> crate::Result<MovieDetail> {
            self.calls.lock().unwrap().push(id.to_string());
            let n: u64 = id.as_str().trim_start_matches("tt").parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(40 - n * 10)).await;

            if self.fail.contains(&id.as_str()) {
                let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
                return Err(crate::Error::Json(err));
            }
            Ok(MovieDetail {
                title: format!("Movie {}", id),
                is_successful: true,
                ..MovieDetail::unsuccessful(id.clone())
            })
        }
    }

    fn ids(raw: &[&str]) -> Vec<MovieId> {
        raw.iter().map(|s| MovieId::from(*s)).collect()
    }

    #[tokio::test]
    async fn test_fetch_details_preserves_input_order() {
        let api = SlowCatalog {
            fail: vec![],
            calls: Mutex::new(vec![]),
        };
        let details = fetch_details(&api, &ids(&["tt1", "tt2", "tt3"])).await;
        let got: Vec<_> = details
            .iter()
            .map(|d| d.as_ref().map(|d| d.id.to_string()))
            .collect();
        assert_eq!(
            got,
            vec![
                Some("tt1".to_string()),
                Some("tt2".to_string()),
                Some("tt3".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_one_failure_leaves_a_hole_not_an_error() {
        let api = SlowCatalog {
            fail: vec!["tt2"],
            calls: Mutex::new(vec![]),
        };
        let details = fetch_details(&api, &ids(&["tt1", "tt2", "tt3"])).await;
        assert_eq!(details.len(), 3);
        assert!(details[0].is_some());
        assert!(details[1].is_none());
        assert!(details[2].is_some());
        assert_eq!(api.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_listings_degrades_failed_items() {
        let api = SlowCatalog {
            fail: vec!["tt3"],
            calls: Mutex::new(vec![]),
        };
        let listings = search_listings(&api, "movie").await.unwrap();
        assert_eq!(listings.len(), 3);
        assert!(!listings[0].is_degraded());
        assert!(listings[2].is_degraded());
        assert_eq!(listings[2].summary.title, "Movie tt3");
    }

    #[tokio::test]
    async fn test_empty_batch_issues_nothing() {
        let api = SlowCatalog {
            fail: vec![],
            calls: Mutex::new(vec![]),
        };
        assert!(fetch_details(&api, &[]).await.is_empty());
        assert!(api.calls.lock().unwrap().is_empty());
    }
}
