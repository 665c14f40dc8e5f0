use axum::{extract::State, Json};

use super::memory::new_submission;
use super::protocol::SubmitResponse;
use crate::query::types::Record;
use crate::server::AppState;

pub async fn handle_submit(
    State(state): State<AppState>,
    Json(fields): Json<Record>,
) -> Json<SubmitResponse> {
    let stored = state.store.append(new_submission(fields));
    tracing::info!(
        "Stored submission with {} fields ({} records total)",
        stored.len(),
        state.store.len()
    );

    Json(SubmitResponse {
        data: Record::clone(&stored),
    })
}

pub async fn handle_list_submissions(State(state): State<AppState>) -> Json<Vec<Record>> {
    let records = state
        .store
        .snapshot()
        .iter()
        .map(|record| Record::clone(record))
        .collect();

    Json(records)
}
