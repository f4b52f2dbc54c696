//! Claims handlers

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::warn;

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Evaluates a single claim record
pub async fn evaluate_claim(
    State(state): State<AppState>,
    Json(record): Json<ClaimRecord>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let response = evaluate_record(&state, record)?;
    Ok(Json(response))
}

/// Evaluates a list of claim records independently
///
/// A record that cannot be parsed or evaluated yields an error entry at its
/// position; the other records are still evaluated.
pub async fn evaluate_batch(
    State(state): State<AppState>,
    Json(records): Json<Vec<Value>>,
) -> Json<BatchResponse> {
    let results = records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let outcome = serde_json::from_value::<ClaimRecord>(raw)
                .map_err(ApiError::from)
                .and_then(|record| evaluate_record(&state, record));

            match outcome {
                Ok(response) => BatchEntry {
                    index,
                    result: Some(response),
                    error: None,
                },
                Err(err) => {
                    warn!(index, error = %err, "Batch claim failed");
                    BatchEntry {
                        index,
                        result: None,
                        error: Some(err.to_response_parts().1),
                    }
                }
            }
        })
        .collect();

    Json(BatchResponse { results })
}

fn evaluate_record(state: &AppState, record: ClaimRecord) -> Result<EvaluationResponse, ApiError> {
    let claim = record.into_claim_input(state.config.default_currency)?;
    let result = state.engine.evaluate(&claim)?;
    Ok(result.into())
}
