use super::evaluator::evaluate;
use super::parser::parse;
use super::types::{Record, SearchResponse};
use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = match params.search {
        Some(query) if !query.is_empty() => query,
        _ => return Err(ApiError::MissingParam("search")),
    };

    let filters = parse(&query);
    tracing::debug!("Parsed filters: {:?}", filters);

    let snapshot = state.store.snapshot();
    let results: Vec<_> = evaluate(&snapshot, &filters)
        .into_iter()
        .map(|record| Record::clone(record))
        .collect();

    tracing::debug!(
        "Search '{}' matched {} of {} records",
        query,
        results.len(),
        snapshot.len()
    );

    Ok(Json(SearchResponse {
        count: results.len(),
        results,
        filters,
    }))
}
