use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::info;

use crate::analyser::Analyser;
use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResponse, ErrorResponse};

/// `POST /analyser`
///
/// Takes the raw body so that an empty or unreadable one gets the usual 400
/// error body rather than an extractor rejection.
pub async fn analyse(
    State(analyser): State<Arc<dyn Analyser>>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, AnalysisError> {
    let request = AnalysisRequest::from_body(&body)?;
    let response = analyser.generate_analysis(request.as_ref()).await?;
    info!(summary = %response.scenario_summary(), "analysis generated");
    Ok(Json(response))
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        // The analyser has already logged the cause.
        let body = if self.is_invalid_scenario() {
            ErrorResponse::bad_request(self.to_string())
        } else {
            ErrorResponse::internal()
        };
        (body.status.code(), Json(body)).into_response()
    }
}
