//! Axum route handlers for the Match API.

use axum::{extract::State, Form, Json};
use serde::Deserialize;

use crate::matching::reconciler::{reconcile_match, MatchResult};
use crate::state::AppState;

/// Form-encoded match request. Both fields required; presence is the only
/// validation (a missing field is rejected by the Form extractor).
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub jd_text: String,
}

/// POST /match
///
/// Always responds 200 with the four-key MatchResult shape — upstream
/// failures surface as `match_score: 0` with the error in `explanation`,
/// never as an HTTP error status. Deliberate: clients branch on the payload,
/// not the status code. Failures are logged server-side by the reconciler.
pub async fn handle_match(
    State(state): State<AppState>,
    Form(request): Form<MatchRequest>,
) -> Json<MatchResult> {
    let result =
        reconcile_match(state.llm.as_ref(), &request.resume_text, &request.jd_text).await;
    Json(result)
}
