use std::time::Instant;

use reqwest::Client;
use thiserror::Error;

use super::models::{GeocodingResponse, Place};
use crate::telemetry::record_upstream_call;

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("Failed to fetch geocoding data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Geocoding API error: {0}")]
    ApiError(String),

    #[error("Place not found: {0}")]
    NotFound(String),
}

/// Resolves free-text queries to a single place via the geocoding name search
pub struct PlaceResolver {
    client: Client,
    url: String,
    count: u8,
    language: String,
}

impl PlaceResolver {
    pub fn new(client: Client, url: &str, count: u8, language: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            count,
            language: language.to_string(),
        }
    }

    /// Fetch up to `count` candidates for `query`, in the geocoder's ranking order
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodingError> {
        tracing::debug!(query = %query, count = self.count, "Geocoding place name");

        let started = Instant::now();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("name", query.to_string()),
                ("count", self.count.to_string()),
                ("language", self.language.clone()),
            ])
            .send()
            .await
            .inspect_err(|_| record_upstream_call("geocoding", "error", started))?;

        let status = response.status();
        if !status.is_success() {
            record_upstream_call("geocoding", "error", started);
            let text = response.text().await.unwrap_or_default();
            return Err(GeocodingError::ApiError(format!("HTTP {}: {}", status, text)));
        }

        let data: GeocodingResponse = response
            .json()
            .await
            .inspect_err(|_| record_upstream_call("geocoding", "error", started))?;
        record_upstream_call("geocoding", "ok", started);

        Ok(data.results.unwrap_or_default())
    }

    /// Resolve `query` to the best candidate
    pub async fn resolve(&self, query: &str) -> Result<Place, GeocodingError> {
        let candidates = self.search(query).await?;
        let candidate_count = candidates.len();

        let place = select_candidate(query, candidates)
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))?;

        tracing::debug!(
            query = %query,
            candidates = candidate_count,
            name = %place.name,
            lat = %place.latitude,
            lon = %place.longitude,
            "Resolved place"
        );

        Ok(place)
    }
}

/// Pick the first candidate whose name, admin1 or country occurs in the query
/// (case-insensitive), otherwise the geocoder's first candidate.
///
/// Returns `None` only when there are no candidates.
pub fn select_candidate(query: &str, candidates: Vec<Place>) -> Option<Place> {
    let query = query.to_lowercase();
    let mentioned =
        |field: Option<&str>| field.is_some_and(|f| !f.is_empty() && query.contains(&f.to_lowercase()));

    let matched = candidates.iter().position(|c| {
        query.contains(&c.name.to_lowercase())
            || mentioned(c.admin1.as_deref())
            || mentioned(c.country.as_deref())
    });

    candidates.into_iter().nth(matched.unwrap_or(0))
}
