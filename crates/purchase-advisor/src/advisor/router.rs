use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::PurchaseAnswer;
use super::evaluation::{EvaluationError, PurchaseScorer};

/// Router builder exposing the evaluation endpoint.
pub fn evaluation_router(scorer: Arc<PurchaseScorer>) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .with_state(scorer)
}

pub(crate) async fn evaluate_handler(
    State(scorer): State<Arc<PurchaseScorer>>,
    payload: Result<Json<PurchaseAnswer>, JsonRejection>,
) -> Response {
    let answer = match payload {
        Ok(Json(answer)) => answer,
        Err(rejection) => {
            let error = EvaluationError::invalid("body", rejection.body_text());
            warn!(%error, "rejected evaluation request");
            return bad_request(&error);
        }
    };

    match scorer.evaluate(&answer) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => {
            warn!(%error, "rejected evaluation request");
            bad_request(&error)
        }
    }
}

fn bad_request(error: &EvaluationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
