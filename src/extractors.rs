use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

use crate::report::models::ReportQuery;

/// Extracts the `?query=` place text
///
/// Never rejects: a missing or malformed query string yields an empty value,
/// which the report pipeline answers with its own 400 body.
#[derive(Debug)]
pub struct PlaceQuery(pub String);

impl PlaceQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for PlaceQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<ReportQuery>::from_request_parts(parts, state)
            .await
            .map(|Query(q)| q.query.unwrap_or_default())
            .unwrap_or_default();

        Ok(PlaceQuery(query))
    }
}
